//! Error types for passcrypt.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for passcrypt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while encrypting or decrypting.
#[derive(Error, Debug)]
pub enum Error {
    /// Target path does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// File exists but could not be read or opened.
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content header matched the blocklist, or the file is too short to inspect.
    #[error("Invalid file type: {}", .0.display())]
    InvalidFileType(PathBuf),

    /// Derived key could not be decoded to the cipher's key size.
    #[error("Key decode error: {0}")]
    KeyDecode(String),

    /// Block cipher or AEAD mode construction failed.
    #[error("Cipher initialization error: {0}")]
    CipherInit(String),

    /// Secure random generation for the nonce failed.
    #[error("Random source error: {0}")]
    RandomSource(String),

    /// Authenticated decryption failed (wrong passphrase, corrupted or malformed data).
    #[error("Decryption failed: wrong passphrase or corrupted data")]
    Authentication,

    /// Writing the transformed content back failed.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Passphrase could not be obtained or was rejected.
    #[error("Passphrase error: {0}")]
    Passphrase(String),

    /// I/O error on standard streams.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
