//! Résumé text extraction.
//!
//! `extract_text` is the only entry point: it validates the upload, dispatches
//! on the file extension and normalizes whitespace in the result.

mod docx;

#[cfg(test)]
pub(crate) use docx::tests::build_docx;

use thiserror::Error;
use tracing::{debug, info};

pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["pdf", "docx"];

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("file name '{0}' has no extension")]
    MissingExtension(String),

    #[error("unsupported format '.{0}' (accepted: pdf, docx)")]
    UnsupportedFormat(String),

    #[error("file is empty")]
    EmptyFile,

    #[error("file too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },

    #[error("could not read PDF: {0}")]
    Pdf(String),

    #[error("could not read DOCX: {0}")]
    Docx(String),

    #[error("document contains no extractable text")]
    NoText,
}

/// Lower-cased extension of `filename`, without the dot.
pub fn file_extension(filename: &str) -> Result<String, ExtractError> {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Ok(ext.to_ascii_lowercase()),
        _ => Err(ExtractError::MissingExtension(filename.to_string())),
    }
}

pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String, ExtractError> {
    let ext = file_extension(filename)?;
    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(ExtractError::UnsupportedFormat(ext));
    }
    if bytes.is_empty() {
        return Err(ExtractError::EmptyFile);
    }
    if bytes.len() > MAX_FILE_SIZE {
        return Err(ExtractError::TooLarge {
            size: bytes.len(),
            max: MAX_FILE_SIZE,
        });
    }

    debug!("Extracting text from '{filename}' ({} bytes)", bytes.len());
    let raw = match ext.as_str() {
        "pdf" => extract_pdf(bytes)?,
        _ => docx::extract_docx(bytes)?,
    };

    let text = clean_text(&raw);
    if text.is_empty() {
        return Err(ExtractError::NoText);
    }
    info!("Extracted {} characters from '{filename}'", text.chars().count());
    Ok(text)
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    // pdf-extract panics on some malformed inputs instead of returning an error.
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractError::Pdf(e.to_string())),
        Err(_) => Err(ExtractError::Pdf("parser aborted on malformed document".into())),
    }
}

/// Collapses blank-line runs and horizontal whitespace, trimming every line.
pub fn clean_text(raw: &str) -> String {
    raw.split('\n')
        .filter(|segment| !segment.is_empty())
        .map(|line| {
            line.split([' ', '\t'])
                .filter(|word| !word.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
                .trim()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
