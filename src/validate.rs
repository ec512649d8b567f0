//! Header heuristic applied to files before they are transformed.
//!
//! This is a magic-byte check at a fixed offset, not a file-type sniffer: it
//! lowercases bytes 1..=3 and rejects the handful of markers in
//! [`header::BLOCKED`].

use crate::config::header;
use crate::error::{Error, Result};
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

/// Why content was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Content ends before the header window.
    TooShort,
    /// Header window matched a blocked marker.
    BlockedHeader,
}

/// Outcome of inspecting a file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// Full content of the inspected file.
    pub content: Vec<u8>,
    /// Set when the content may not be transformed.
    pub rejection: Option<Rejection>,
}

impl Validation {
    /// Whether the content may be transformed.
    pub fn is_valid(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Check the header window, returning the reason the content is refused.
pub fn check_header(bytes: &[u8]) -> Option<Rejection> {
    let Some(window) = bytes.get(header::WINDOW_START..header::MIN_FILE_LEN) else {
        return Some(Rejection::TooShort);
    };
    let window = window.to_ascii_lowercase();

    header::BLOCKED
        .iter()
        .any(|marker| marker.as_bytes() == window.as_slice())
        .then_some(Rejection::BlockedHeader)
}

/// Returns true if the header window lowercases to a blocked marker.
///
/// Content too short to hold the window counts as blocked.
pub fn has_blocked_header(bytes: &[u8]) -> bool {
    check_header(bytes).is_some()
}

/// Inspect raw content.
pub fn inspect(content: Vec<u8>) -> Validation {
    let rejection = check_header(&content);
    Validation { content, rejection }
}

/// Read a file and check its header.
///
/// Returns the full content when the file passes. A missing, unreadable or
/// rejected file is logged and returned as an error; no content is returned
/// in those cases.
pub fn validate_file(path: &Path) -> Result<Vec<u8>> {
    let content = match std::fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("File not found, nothing will be done: {}", path.display());
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            warn!(
                "Unknown error while opening {}: {}. Nothing will be done.",
                path.display(),
                e
            );
            return Err(Error::FileRead {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let validation = inspect(content);
    match validation.rejection {
        None => Ok(validation.content),
        Some(Rejection::TooShort) => {
            warn!(
                "File too short to inspect ({} bytes, need {}): {}",
                validation.content.len(),
                header::MIN_FILE_LEN,
                path.display()
            );
            Err(Error::InvalidFileType(path.to_path_buf()))
        }
        Some(Rejection::BlockedHeader) => {
            warn!("Cannot transform this file type: {}", path.display());
            Err(Error::InvalidFileType(path.to_path_buf()))
        }
    }
}
