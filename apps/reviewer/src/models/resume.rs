use std::path::PathBuf;

use crate::extract::DocumentFormat;

/// A supported document found in the resume folder. Its bytes are read once
/// during extraction and not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub filename: String,
    pub path: PathBuf,
    pub format: DocumentFormat,
}

/// One exported record: a resume that yielded both text and a candidate email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub filename: String,
    pub email: String,
    pub feedback: String,
}
