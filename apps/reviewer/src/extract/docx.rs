//! DOCX text extraction: read `word/document.xml` out of the zip container and
//! walk it with `quick-xml`, emitting one line per `w:p` paragraph.

use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use super::{read_document, ExtractionError};

const DOCUMENT_PART: &str = "word/document.xml";

/// Reads the DOCX at `path` and returns every paragraph's text followed by `\n`.
pub async fn extract_docx_text(path: &Path) -> Result<String, ExtractionError> {
    let bytes = read_document(path).await?;
    let text = extract_docx_text_from_bytes(&bytes)?;
    debug!("Extracted {} chars from {}", text.chars().count(), path.display());
    Ok(text)
}

pub fn extract_docx_text_from_bytes(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut part = archive.by_name(DOCUMENT_PART)?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| ExtractionError::DocxXml(format!("{DOCUMENT_PART}: {e}")))?;

    paragraphs_to_text(&xml)
}

/// A paragraph still waiting for its closing tag. `flushed` is set once its
/// leading text was emitted ahead of a nested (text box) paragraph.
#[derive(Default)]
struct OpenParagraph {
    text: String,
    flushed: bool,
}

/// Paragraphs are emitted in document order. A paragraph nested inside another
/// (text boxes) splits its parent: text before the box, the box, then the rest.
/// `mc:Fallback` repeats the `mc:Choice` content for old readers and is skipped.
fn paragraphs_to_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut text = String::new();
    let mut open_paragraphs: Vec<OpenParagraph> = Vec::new();
    let mut run_depth = 0usize;
    let mut in_run_text = false;
    let mut fallback_depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractionError::DocxXml(format!(
                    "at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
            Ok(Event::Start(_)) if fallback_depth > 0 => fallback_depth += 1,
            Ok(Event::End(_)) if fallback_depth > 0 => fallback_depth -= 1,
            _ if fallback_depth > 0 => {}
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"Fallback" => fallback_depth = 1,
                b"p" => open_paragraph(&mut open_paragraphs, &mut text),
                b"r" => run_depth += 1,
                b"t" => in_run_text = run_depth > 0,
                other if run_depth > 0 => push_inline(&mut open_paragraphs, other),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    open_paragraph(&mut open_paragraphs, &mut text);
                    close_paragraph(&mut open_paragraphs, &mut text);
                }
                other if run_depth > 0 => push_inline(&mut open_paragraphs, other),
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_run_text => {
                let run = e
                    .unescape()
                    .map_err(|err| ExtractionError::DocxXml(err.to_string()))?;
                if let Some(paragraph) = open_paragraphs.last_mut() {
                    paragraph.text.push_str(&run);
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"r" => run_depth = run_depth.saturating_sub(1),
                b"p" => close_paragraph(&mut open_paragraphs, &mut text),
                _ => {}
            },
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

fn open_paragraph(open_paragraphs: &mut Vec<OpenParagraph>, text: &mut String) {
    if let Some(parent) = open_paragraphs.last_mut() {
        if !parent.text.is_empty() {
            text.push_str(&parent.text);
            text.push('\n');
            parent.text.clear();
            parent.flushed = true;
        }
    }
    open_paragraphs.push(OpenParagraph::default());
}

fn close_paragraph(open_paragraphs: &mut Vec<OpenParagraph>, text: &mut String) {
    let Some(paragraph) = open_paragraphs.pop() else {
        return;
    };
    // A split parent with nothing after its text box adds no extra line
    if paragraph.flushed && paragraph.text.is_empty() {
        return;
    }
    text.push_str(&paragraph.text);
    text.push('\n');
}

/// Tabs and line breaks inside a run become literal whitespace. Tab stops
/// declared in paragraph properties are not runs and never reach here.
fn push_inline(open_paragraphs: &mut [OpenParagraph], local_name: &[u8]) {
    let Some(paragraph) = open_paragraphs.last_mut() else {
        return;
    };
    match local_name {
        b"tab" => paragraph.text.push('\t'),
        b"br" | b"cr" => paragraph.text.push('\n'),
        _ => {}
    }
}
