//! SHA-256 passphrase key derivation.
//!
//! The key is a single unsalted SHA-256 pass over the passphrase. There is no
//! work factor, so a captured payload can be attacked offline at hash speed.

use crate::config::KEY_SIZE;
use crate::error::{Error, Result};
use sha2::{Digest, Sha256};

/// Hash a passphrase and render the digest as 64 lowercase hex characters.
pub fn sha_hash(passphrase: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(passphrase.as_bytes());
    hex::encode(hasher.finalize())
}

/// Decode a hex key string into raw key bytes.
///
/// Fails with [`Error::KeyDecode`] when the string is not valid hex or does
/// not decode to exactly [`KEY_SIZE`] bytes.
pub fn decode_key(hex_key: &str) -> Result<[u8; KEY_SIZE]> {
    let bytes = hex::decode(hex_key).map_err(|e| Error::KeyDecode(e.to_string()))?;

    bytes.try_into().map_err(|bytes: Vec<u8>| {
        Error::KeyDecode(format!(
            "expected {} key bytes, got {}",
            KEY_SIZE,
            bytes.len()
        ))
    })
}

/// Derive the 256-bit key for a passphrase.
pub fn derive_key(passphrase: &str) -> Result<[u8; KEY_SIZE]> {
    decode_key(&sha_hash(passphrase))
}
