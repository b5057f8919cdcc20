//! Document text extraction
//!
//! Turns an uploaded artifact into the plain text the checker scores.
//! Two formats are accepted, chosen by file extension:
//!
//! - `.txt` - decoded as UTF-8, invalid sequences are dropped
//! - `.pdf` - text of every page, concatenated (requires the `pdf` feature)

#[cfg(feature = "pdf")]
use std::any::Any;
#[cfg(feature = "pdf")]
use std::panic;
use std::path::Path;

#[cfg(feature = "pdf")]
use log::warn;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Debug, Error)]
pub enum ExtractError {
    /// File extension is neither `.pdf` nor `.txt`
    #[error("Only .pdf and .txt files are supported")]
    Unsupported,

    /// The artifact has no bytes at all
    #[error("Uploaded file is empty")]
    Empty,

    /// The PDF could not be parsed
    #[error("Could not parse PDF: {0}")]
    Pdf(String),
}

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Portable Document Format
    Pdf,
    /// Plain text
    Text,
}

impl DocumentKind {
    /// Determine the format from a file name's extension (case-insensitive)
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("pdf") => Ok(Self::Pdf),
            Some("txt") => Ok(Self::Text),
            _ => Err(ExtractError::Unsupported),
        }
    }
}

/// Extract plain text from a document's bytes
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractError> {
    if bytes.is_empty() {
        return Err(ExtractError::Empty);
    }

    match kind {
        DocumentKind::Text => Ok(decode_lossy(bytes)),
        DocumentKind::Pdf => extract_pdf(bytes),
    }
}

/// Decode UTF-8, silently dropping invalid byte sequences
fn decode_lossy(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Text of every page, concatenated
///
/// `pdf-extract` panics on some malformed font dictionaries, so a panic is
/// reported as a parse failure like any other.
#[cfg(feature = "pdf")]
fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractError::Pdf(e.to_string())),
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            warn!("pdf extraction panicked: {reason}");
            Err(ExtractError::Pdf(format!("malformed document ({reason})")))
        },
    }
}

#[cfg(feature = "pdf")]
fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown error".to_string())
}

#[cfg(not(feature = "pdf"))]
fn extract_pdf(_bytes: &[u8]) -> Result<String, ExtractError> {
    Err(ExtractError::Pdf("PDF support not compiled in".to_string()))
}
