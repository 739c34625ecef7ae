//! FeedbackExport — writes the run's result rows to an xlsx workbook.
//!
//! The workbook is rendered in memory, written to a temp file beside the target
//! and renamed over it, so a failed export never leaves a half-written file.
//! Any previous export at the same path is replaced.

use std::io::Write;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

use crate::models::ResultRow;

pub const COLUMNS: [&str; 3] = ["Filename", "Email", "Feedback"];

/// Excel rejects cells longer than this.
const MAX_CELL_CHARS: usize = 32_767;
const COLUMN_WIDTHS: [f64; 3] = [32.0, 36.0, 100.0];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes one header row plus one row per `ResultRow`, in order.
pub fn write_feedback_export(path: &Path, rows: &[ResultRow]) -> Result<(), ExportError> {
    let buffer = render_workbook(rows)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_err = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(&buffer).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    debug!("Wrote {} rows ({} bytes) to {}", rows.len(), buffer.len(), path.display());
    Ok(())
}

fn render_workbook(rows: &[ResultRow]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let header = Format::new().set_bold();

    for (col, (name, width)) in COLUMNS.iter().zip(COLUMN_WIDTHS).enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, &header)?;
        sheet.set_column_width(col as u16, width)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_string(r, 0, cell_text(&row.filename))?;
        sheet.write_string(r, 1, cell_text(&row.email))?;
        sheet.write_string(r, 2, cell_text(&row.feedback))?;
    }

    workbook.save_to_buffer()
}

fn cell_text(value: &str) -> &str {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((byte_idx, _)) => &value[..byte_idx],
        None => value,
    }
}
