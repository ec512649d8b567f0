//! Passphrase-based in-place file and buffer encryption.
//!
//! Content is sealed with AES-256-GCM under a key derived from a passphrase
//! by a single SHA-256 pass.
//!
//! # Features
//!
//! - **File API**: encrypt or decrypt a file in place via [`Encryption`]
//! - **Buffer API**: [`encrypt_byte_stream`] / [`decrypt_byte_stream`] with no file I/O
//! - **Header check**: files whose bytes 1..=3 read `exe` or `elf` are refused
//!
//! # Payload format
//!
//! ```text
//! nonce (12 bytes) || ciphertext || tag (16 bytes)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use passcrypt::{Encrypter, Encryption};
//!
//! let request = Encryption::new("notes.txt", "correct horse");
//! request.encrypt().unwrap();
//! request.decrypt().unwrap();
//! ```

pub mod config;
pub mod crypto;
pub mod error;
pub mod file;
pub mod stream;
pub mod validate;

pub use error::{Error, Result};
pub use file::{Encrypter, Encryption};
pub use stream::{decrypt_byte_stream, encrypt_byte_stream};
