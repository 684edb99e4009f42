//! Centralized validation and helper functions.

use std::path::Path;

/// Largest document accepted from disk (64 MiB)
pub const MAX_DOCUMENT_BYTES: u64 = 64 * 1024 * 1024;

/// Input validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Document too large: {size} bytes exceeds maximum of {MAX_DOCUMENT_BYTES}")]
    DocumentTooLarge { size: u64 },
    #[error("Document is empty: {0}")]
    EmptyDocument(String),
    #[error("Document is not valid UTF-8: {0}")]
    NotUtf8(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Check a document size against [`MAX_DOCUMENT_BYTES`].
///
/// # Errors
///
/// Returns `ValidationError::DocumentTooLarge` if the limit is exceeded.
pub fn check_document_size(size: u64) -> Result<(), ValidationError> {
    if size > MAX_DOCUMENT_BYTES {
        Err(ValidationError::DocumentTooLarge { size })
    } else {
        Ok(())
    }
}

/// Read a UTF-8 text document, refusing oversized files before loading them.
///
/// # Errors
///
/// Returns `ValidationError::DocumentTooLarge` for files over the limit,
/// `ValidationError::NotUtf8` for binary content, or `ValidationError::Io`.
pub fn read_document(path: &Path) -> Result<String, ValidationError> {
    check_document_size(std::fs::metadata(path)?.len())?;
    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| ValidationError::NotUtf8(path.display().to_string()))
}

/// Like [`read_document`], but a zero-length file is an error.
///
/// Whitespace-only text is accepted: it is still text to compress.
///
/// # Errors
///
/// Returns `ValidationError::EmptyDocument` in addition to the errors of
/// [`read_document`].
pub fn read_non_empty_document(path: &Path) -> Result<String, ValidationError> {
    let text = read_document(path)?;
    if text.is_empty() {
        return Err(ValidationError::EmptyDocument(path.display().to_string()));
    }
    Ok(text)
}

/// Printable form of a symbol for code listings.
///
/// ```
/// use doc_analyzer::utils::validation::display_symbol;
///
/// assert_eq!(display_symbol(' '), "␣");
/// assert_eq!(display_symbol('\n'), "\\n");
/// assert_eq!(display_symbol('x'), "x");
/// ```
#[must_use]
pub fn display_symbol(symbol: char) -> String {
    match symbol {
        ' ' => "␣".to_string(),
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        '\r' => "\\r".to_string(),
        c if c.is_control() => c.escape_unicode().to_string(),
        c => c.to_string(),
    }
}
