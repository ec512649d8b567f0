//! AES-256-GCM authenticated encryption.

use crate::config::{NONCE_SIZE, TAG_SIZE};
use crate::error::{Error, Result};
use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use rand::rngs::OsRng;
use rand::RngCore;

/// AES-256-GCM cipher wrapper.
pub struct Cipher {
    cipher: Aes256Gcm,
}

impl Cipher {
    /// Create a new cipher from raw key bytes.
    ///
    /// Anything other than a 32-byte key is rejected with [`Error::CipherInit`].
    pub fn new(key: &[u8]) -> Result<Self> {
        let cipher = Aes256Gcm::new_from_slice(key)
            .map_err(|e| Error::CipherInit(format!("{} (key is {} bytes)", e, key.len())))?;
        Ok(Self { cipher })
    }

    /// Encrypt data with a fresh random nonce.
    ///
    /// Returns: nonce (12 bytes) || ciphertext || tag (16 bytes)
    pub fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut nonce_bytes = [0u8; NONCE_SIZE];
        OsRng
            .try_fill_bytes(&mut nonce_bytes)
            .map_err(|e| Error::RandomSource(e.to_string()))?;
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext)
            .map_err(|e| Error::CipherInit(e.to_string()))?;

        let mut result = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        result.extend_from_slice(&nonce_bytes);
        result.extend_from_slice(&ciphertext);

        Ok(result)
    }

    /// Decrypt a payload produced by [`Cipher::seal`].
    ///
    /// Expects: nonce (12 bytes) || ciphertext || tag (16 bytes)
    pub fn open(&self, payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() < NONCE_SIZE + TAG_SIZE {
            return Err(Error::Authentication);
        }

        let (nonce_bytes, ciphertext) = payload.split_at(NONCE_SIZE);
        let nonce = Nonce::from_slice(nonce_bytes);

        self.cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| Error::Authentication)
    }

    /// Decrypt a hex-encoded payload.
    ///
    /// Malformed hex is reported as [`Error::Authentication`], the same as a
    /// tag mismatch.
    pub fn open_hex(&self, payload_hex: &str) -> Result<Vec<u8>> {
        let payload = hex::decode(payload_hex).map_err(|_| Error::Authentication)?;
        self.open(&payload)
    }
}
