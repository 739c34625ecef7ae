//! Text Extractor — turns a resume document into one plain-text string.
//!
//! Only PDF and DOCX are supported. Anything else never reaches this module;
//! `DocumentFormat::from_path` returns `None` and the batch skips the file.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod docx;
pub mod pdf;

pub use docx::extract_docx_text;
pub use pdf::extract_pdf_text;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid PDF: {0}")]
    Pdf(String),

    #[error("invalid DOCX archive: {0}")]
    DocxArchive(#[from] zip::result::ZipError),

    #[error("malformed DOCX document: {0}")]
    DocxXml(String),

    #[error("extraction worker failed: {0}")]
    Worker(String),
}

/// Supported resume formats, decided purely by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            _ => None,
        }
    }
}

/// Extracts the full text of `path` using the parser for `format`.
pub async fn extract_text(path: &Path, format: DocumentFormat) -> Result<String, ExtractionError> {
    match format {
        DocumentFormat::Pdf => extract_pdf_text(path).await,
        DocumentFormat::Docx => extract_docx_text(path).await,
    }
}

async fn read_document(path: &Path) -> Result<Vec<u8>, ExtractionError> {
    tokio::fs::read(path)
        .await
        .map_err(|source| ExtractionError::Read {
            path: path.to_path_buf(),
            source,
        })
}
