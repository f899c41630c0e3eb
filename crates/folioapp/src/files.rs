//! # File Uploads
//!
//! Images and documents reach the profile as data-URIs. Before anything is
//! handed to the store, a file is checked against the allow-list and size
//! ceiling of its [`UploadKind`]; a rejected or unreadable file commits nothing.

use crate::error::{FolioError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::Path;
use thiserror::Error;

const MIB: u64 = 1024 * 1024;

pub const MAX_IMAGE_BYTES: u64 = 5 * MIB;
pub const MAX_DOCUMENT_BYTES: u64 = 10 * MIB;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// Profile photo, project screenshot.
    Image,
    /// Resume.
    Document,
}

impl UploadKind {
    pub fn allowed_types(&self) -> &'static [&'static str] {
        match self {
            UploadKind::Image => &["image/jpeg", "image/jpg", "image/png", "image/webp"],
            UploadKind::Document => &["application/pdf"],
        }
    }

    pub fn max_bytes(&self) -> u64 {
        match self {
            UploadKind::Image => MAX_IMAGE_BYTES,
            UploadKind::Document => MAX_DOCUMENT_BYTES,
        }
    }
}

/// Why an upload was refused. The messages are shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FileRejection {
    #[error("Please select a valid image file (JPEG, JPG, PNG, or WebP)")]
    UnsupportedImageType,
    #[error("Image size must be less than 5MB")]
    ImageTooLarge,
    #[error("Please select a valid PDF file")]
    UnsupportedDocumentType,
    #[error("PDF size must be less than 10MB")]
    DocumentTooLarge,
}

/// Check a file's declared type, then its size.
pub fn validate(kind: UploadKind, mime: &str, size: u64) -> std::result::Result<(), FileRejection> {
    if !kind.allowed_types().contains(&mime) {
        return Err(match kind {
            UploadKind::Image => FileRejection::UnsupportedImageType,
            UploadKind::Document => FileRejection::UnsupportedDocumentType,
        });
    }
    if size > kind.max_bytes() {
        return Err(match kind {
            UploadKind::Image => FileRejection::ImageTooLarge,
            UploadKind::Document => FileRejection::DocumentTooLarge,
        });
    }
    Ok(())
}

/// `data:<mime>;base64,<payload>`
pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// MIME type implied by a file extension, for the types uploads accept.
pub fn mime_from_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}

/// Validate and encode the file at `path` as a data-URI.
pub fn prepare_upload(path: &Path, kind: UploadKind) -> Result<String> {
    let mime = mime_from_path(path).unwrap_or("application/octet-stream");
    let size = fs::metadata(path).map_err(FolioError::Io)?.len();
    validate(kind, mime, size)?;

    let bytes = fs::read(path).map_err(FolioError::Io)?;
    Ok(to_data_uri(mime, &bytes))
}

/// Human-readable size: "0 Bytes", "1.5 KB", "5 MB".
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}
