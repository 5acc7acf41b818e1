//! Candidate validation
//!
//! Gates a dropped or picked file on the PDF media type before it can become
//! the current selection. The extension mapping is confirmed by sniffing the
//! PDF magic bytes, so a renamed text file does not pass.

use crate::models::SelectedFile;
use crate::utils::format_size;
use chrono::Utc;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// The only media type the uploader accepts
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Magic bytes at the start of every PDF file
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Why a candidate could not become the selection
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Recoverable: shown inline, reported as a null selection
    #[error("Only PDF files are supported.")]
    UnsupportedMediaType,
    /// The candidate could not be read at all
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

impl ValidationError {
    /// Media-type rejections are recoverable outcomes, not command errors
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ValidationError::UnsupportedMediaType)
    }
}

/// Validate a candidate path and build the `SelectedFile` record for it
pub fn validate_candidate(path: &Path) -> Result<SelectedFile, ValidationError> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(ValidationError::UnsupportedMediaType);
    }

    let media_type = path
        .extension()
        .and_then(|ext| mime_guess::from_ext(&ext.to_string_lossy()).first())
        .map(|m| m.to_string());

    if media_type.as_deref() != Some(PDF_MEDIA_TYPE) {
        return Err(ValidationError::UnsupportedMediaType);
    }

    if !has_pdf_magic(path)? {
        return Err(ValidationError::UnsupportedMediaType);
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let size = metadata.len();

    Ok(SelectedFile {
        name,
        size,
        size_display: format_size(size),
        media_type: PDF_MEDIA_TYPE.to_string(),
        path: path.to_string_lossy().to_string(),
        selected_at: Utc::now(),
    })
}

/// Check that the file content starts with `%PDF-`
fn has_pdf_magic(path: &Path) -> std::io::Result<bool> {
    let file = std::fs::File::open(path)?;
    let mut head = Vec::with_capacity(PDF_MAGIC.len());
    file.take(PDF_MAGIC.len() as u64).read_to_end(&mut head)?;
    Ok(head == PDF_MAGIC)
}
