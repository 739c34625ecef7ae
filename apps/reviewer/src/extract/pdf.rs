//! PDF text extraction via `pdf-extract`.
//!
//! Parsing is CPU-bound and the parser can panic on hostile input, so it runs
//! inside `spawn_blocking`; a panic surfaces as `ExtractionError::Worker`.

use std::path::Path;

use tracing::debug;

use super::{read_document, ExtractionError};

/// Reads every page of the PDF at `path` in order and returns their text.
pub async fn extract_pdf_text(path: &Path) -> Result<String, ExtractionError> {
    let bytes = read_document(path).await?;

    let text = tokio::task::spawn_blocking(move || extract_pdf_text_from_bytes(&bytes))
        .await
        .map_err(|e| ExtractionError::Worker(format!("PDF parser aborted: {e}")))??;

    debug!("Extracted {} chars from {}", text.chars().count(), path.display());
    Ok(text)
}

/// Page text is concatenated in document order without an added separator.
pub fn extract_pdf_text_from_bytes(bytes: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::build_pdf;

    #[test]
    fn test_single_page_text_is_extracted() {
        let bytes = build_pdf(&["Experienced engineer jane@example.com"]);
        let text = extract_pdf_text_from_bytes(&bytes).unwrap();
        assert!(text.contains("jane@example.com"), "got: {text:?}");
    }

    #[test]
    fn test_pages_are_extracted_in_order() {
        let bytes = build_pdf(&["AlphaPage", "BravoPage", "CharliePage"]);
        let text = extract_pdf_text_from_bytes(&bytes).unwrap();

        let a = text.find("AlphaPage").expect("page 1 text");
        let b = text.find("BravoPage").expect("page 2 text");
        let c = text.find("CharliePage").expect("page 3 text");
        assert!(a < b && b < c, "pages out of order: {text:?}");
    }

    #[test]
    fn test_non_pdf_bytes_are_rejected() {
        let err = extract_pdf_text_from_bytes(b"this is not a pdf at all").unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }

    #[tokio::test]
    async fn test_extract_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, build_pdf(&["Summary", "Experience"])).unwrap();

        let text = extract_pdf_text(&path).await.unwrap();
        assert!(text.contains("Summary"));
        assert!(text.contains("Experience"));
    }
}
