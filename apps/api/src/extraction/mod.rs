//! Resume text extraction: turns an uploaded `.txt`, `.pdf` or `.docx` into plain text.
//!
//! The scoring engine only ever sees the returned text.

mod docx;
pub mod handlers;

use std::path::Path;

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq)]
pub enum ExtractionError {
    #[error("No selected file")]
    EmptyFileName,

    #[error("Unsupported file type. Please upload a .txt, .docx, or .pdf file.")]
    UnsupportedType,

    #[error("Failed to extract text from the file: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Text,
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Case-insensitive dispatch on the file extension.
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtractionError> {
        if file_name.trim().is_empty() {
            return Err(ExtractionError::EmptyFileName);
        }
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("txt") => Ok(DocumentKind::Text),
            Some("pdf") => Ok(DocumentKind::Pdf),
            Some("docx") => Ok(DocumentKind::Docx),
            _ => Err(ExtractionError::UnsupportedType),
        }
    }
}

/// Extracts plain text from an uploaded document. CPU-bound for PDF and DOCX;
/// async callers should run it on a blocking thread.
///
/// `max_extracted_bytes` caps how far a compressed container may expand.
pub fn extract_text(
    file_name: &str,
    bytes: &[u8],
    max_extracted_bytes: usize,
) -> Result<String, ExtractionError> {
    match DocumentKind::from_file_name(file_name)? {
        DocumentKind::Text => String::from_utf8(bytes.to_vec())
            .map_err(|e| ExtractionError::Failed(format!("file is not valid UTF-8: {e}"))),
        DocumentKind::Pdf => extract_pdf(bytes),
        DocumentKind::Docx => docx::extract_docx(bytes, max_extracted_bytes),
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    // pdf-extract panics on some malformed documents
    let outcome = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));
    match outcome {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => {
            warn!("PDF extraction failed: {e}");
            Err(ExtractionError::Failed(e.to_string()))
        }
        Err(_) => {
            warn!("PDF extraction panicked");
            Err(ExtractionError::Failed("unreadable PDF".to_string()))
        }
    }
}
