//! Cryptographic operations for passcrypt.
//!
//! This module provides:
//! - AES-256-GCM authenticated encryption
//! - SHA-256 passphrase key derivation

mod cipher;
mod kdf;

pub use cipher::Cipher;
pub use kdf::{decode_key, derive_key, sha_hash};
