use std::path::PathBuf;

use thiserror::Error;

use crate::export::ExportError;
use crate::extract::ExtractionError;
use crate::llm_client::LlmError;

/// Application-level error type.
///
/// `Extraction` and `Llm` are scoped to a single resume and are caught by the
/// batch loop. `ResumeDir` and `Export` end the run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read resume folder {}: {source}", path.display())]
    ResumeDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}
