//! Document text extraction: PDF via pdf-extract, DOCX via the zip
//! container's `word/document.xml`.

use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use crate::errors::EngineError;
use crate::models::{DocumentFormat, DocumentPayload};

/// Extracts plain text from a document payload.
///
/// A PDF with no text layer (pure image scan) yields empty text rather
/// than an error; the pipeline treats whitespace-only output as an
/// extraction failure. Reads nothing but the input and writes no files.
pub fn extract_text(payload: &DocumentPayload) -> Result<String, EngineError> {
    let text = match payload.format {
        DocumentFormat::Pdf => extract_pdf(&payload.bytes)?,
        DocumentFormat::Docx => extract_docx(&payload.bytes)?,
    };
    debug!(
        format = ?payload.format,
        chars = text.len(),
        "document text extracted"
    );
    Ok(text)
}

/// Reads a document from disk, dispatching on its file extension.
/// Unsupported extensions fail before any bytes are read.
pub fn extract_path(path: &Path) -> Result<String, EngineError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| EngineError::UnsupportedFormat(path.display().to_string()))?;
    let format = DocumentFormat::from_extension(ext)?;
    let bytes = std::fs::read(path)?;
    extract_text(&DocumentPayload::new(bytes, format))
}

fn extract_pdf(bytes: &[u8]) -> Result<String, EngineError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| EngineError::ExtractionFailed(format!("pdf text extraction failed: {e}")))
}

/// Concatenates all paragraph texts in document order, separated by
/// single newlines. Empty paragraphs contribute empty lines.
fn extract_docx(bytes: &[u8]) -> Result<String, EngineError> {
    let cursor = std::io::Cursor::new(bytes);
    let mut archive = zip::ZipArchive::new(cursor)
        .map_err(|e| EngineError::ExtractionFailed(format!("not a docx archive: {e}")))?;
    let mut document = archive
        .by_name("word/document.xml")
        .map_err(|e| EngineError::ExtractionFailed(format!("docx has no document part: {e}")))?;
    let mut xml = String::new();
    document
        .read_to_string(&mut xml)
        .map_err(|e| EngineError::ExtractionFailed(format!("docx document part unreadable: {e}")))?;
    Ok(paragraph_texts(&xml).join("\n"))
}

/// Walks WordprocessingML, accumulating the `<w:t>` character content of
/// each `<w:p>` paragraph. Self-closing paragraphs count as empty.
fn paragraph_texts(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"t" if in_paragraph => in_text = true,
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                if in_text {
                    if let Ok(text) = e.unescape() {
                        current.push_str(&text);
                    }
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    in_paragraph = false;
                    paragraphs.push(std::mem::take(&mut current));
                }
                b"t" => in_text = false,
                _ => {}
            },
            Ok(Event::Empty(ref e)) if e.local_name().as_ref() == b"p" => {
                paragraphs.push(String::new());
            }
            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
    }

    paragraphs
}
