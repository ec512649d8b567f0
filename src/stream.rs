//! In-memory encryption with no file I/O.
//!
//! The header heuristic is a file-path concern and is not applied here.

use crate::crypto::{derive_key, Cipher};
use crate::error::Result;
use tracing::debug;

/// Encrypt a buffer with a passphrase.
///
/// Returns: nonce (12 bytes) || ciphertext || tag (16 bytes)
pub fn encrypt_byte_stream(passphrase: &str, plaintext: &[u8]) -> Result<Vec<u8>> {
    let key = derive_key(passphrase)?;
    let sealed = Cipher::new(&key)?.seal(plaintext)?;

    debug!("Sealed {} bytes into {}", plaintext.len(), sealed.len());
    Ok(sealed)
}

/// Decrypt a buffer produced by [`encrypt_byte_stream`].
pub fn decrypt_byte_stream(passphrase: &str, payload: &[u8]) -> Result<Vec<u8>> {
    let key = derive_key(passphrase)?;
    let plaintext = Cipher::new(&key)?.open_hex(&hex::encode(payload))?;

    debug!("Opened {} bytes into {}", payload.len(), plaintext.len());
    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_hello_scenario() {
        let sealed = encrypt_byte_stream("correct horse", b"Hello").unwrap();
        assert_eq!(sealed.len(), 33);

        let opened = decrypt_byte_stream("correct horse", &sealed).unwrap();
        assert_eq!(opened, [0x48u8, 0x65, 0x6C, 0x6C, 0x6F]);

        assert!(matches!(
            decrypt_byte_stream("wrong horse", &sealed),
            Err(Error::Authentication)
        ));
    }

    #[test]
    fn test_fresh_nonce_each_call() {
        let a = encrypt_byte_stream("pass", b"same plaintext").unwrap();
        let b = encrypt_byte_stream("pass", b"same plaintext").unwrap();

        assert_ne!(a, b);
        assert_eq!(decrypt_byte_stream("pass", &a).unwrap(), b"same plaintext");
        assert_eq!(decrypt_byte_stream("pass", &b).unwrap(), b"same plaintext");
    }

    #[test]
    fn test_blocked_header_allowed_for_buffers() {
        let elf = b"\x7fELF\x02\x01\x01\x00";
        let sealed = encrypt_byte_stream("pass", elf).unwrap();

        assert_eq!(decrypt_byte_stream("pass", &sealed).unwrap(), elf);
    }

    #[test]
    fn test_large_buffer() {
        let plaintext: Vec<u8> = (0..100_000).map(|i| (i % 251) as u8).collect();
        let sealed = encrypt_byte_stream("pass", &plaintext).unwrap();

        assert_eq!(decrypt_byte_stream("pass", &sealed).unwrap(), plaintext);
    }

    #[test]
    fn test_empty_passphrase_and_buffer() {
        let sealed = encrypt_byte_stream("", b"").unwrap();
        assert!(decrypt_byte_stream("", &sealed).unwrap().is_empty());
    }

    #[test]
    fn test_garbage_input_fails() {
        assert!(matches!(
            decrypt_byte_stream("pass", b"short"),
            Err(Error::Authentication)
        ));
    }
}
