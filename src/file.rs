//! In-place file encryption.
//!
//! The file is overwritten directly. There is no backup and no locking: a
//! failure during the write, or a concurrent caller on the same path, can
//! leave the file partially written.

use crate::crypto::{derive_key, Cipher};
use crate::error::{Error, Result};
use crate::validate::validate_file;
use std::fs::OpenOptions;
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Something that can be encrypted and decrypted in place.
pub trait Encrypter {
    /// Replace the plaintext with its encrypted form.
    fn encrypt(&self) -> Result<()>;

    /// Replace the encrypted form with the recovered plaintext.
    fn decrypt(&self) -> Result<()>;
}

/// A request to transform one file with one passphrase.
#[derive(Debug, Clone)]
pub struct Encryption {
    /// File to transform.
    pub file_path: PathBuf,
    /// Passphrase the key is derived from.
    pub passphrase: String,
}

impl Encryption {
    /// Create a new request.
    pub fn new(file_path: impl Into<PathBuf>, passphrase: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            passphrase: passphrase.into(),
        }
    }

    fn cipher(&self) -> Result<Cipher> {
        Cipher::new(&derive_key(&self.passphrase)?)
    }
}

impl Encrypter for Encryption {
    fn encrypt(&self) -> Result<()> {
        let content = validate_file(&self.file_path)?;
        let sealed = self.cipher()?.seal(&content)?;

        debug!(
            "Encrypting {}: {} -> {} bytes",
            self.file_path.display(),
            content.len(),
            sealed.len()
        );
        overwrite(&self.file_path, &sealed)
    }

    fn decrypt(&self) -> Result<()> {
        let content = validate_file(&self.file_path)?;
        let plaintext = self.cipher()?.open_hex(&hex::encode(&content))?;

        debug!(
            "Decrypting {}: {} -> {} bytes",
            self.file_path.display(),
            content.len(),
            plaintext.len()
        );
        overwrite(&self.file_path, &plaintext)
    }
}

/// Write `data` at offset 0 and truncate whatever followed it.
fn overwrite(path: &Path, data: &[u8]) -> Result<()> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    file.seek(SeekFrom::Start(0)).map_err(write_err)?;
    file.write_all(data).map_err(write_err)?;
    file.set_len(data.len() as u64).map_err(write_err)?;
    file.sync_all().map_err(write_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_encrypt_writes_binary_payload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hello.txt");
        fs::write(&path, b"Hello, file").unwrap();

        Encryption::new(&path, "pw").encrypt().unwrap();

        let on_disk = fs::read(&path).unwrap();
        assert_eq!(on_disk.len(), 12 + 11 + 16);
        assert_eq!(
            crate::stream::decrypt_byte_stream("pw", &on_disk).unwrap(),
            b"Hello, file"
        );
    }

    #[test]
    fn test_decrypt_truncates_longer_payload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("short.txt");
        fs::write(&path, b"tiny").unwrap();

        let request = Encryption::new(&path, "pw");
        request.encrypt().unwrap();
        request.decrypt().unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"tiny");
    }

    #[test]
    fn test_overwrite_shrinks_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, vec![7u8; 64]).unwrap();

        overwrite(&path, b"abc").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"abc");
    }

    #[test]
    fn test_overwrite_unopenable_is_read_error() {
        let dir = TempDir::new().unwrap();

        let result = overwrite(dir.path(), b"abc");
        assert!(matches!(result, Err(Error::FileRead { path, .. }) if path == dir.path()));
    }

    #[test]
    fn test_encrypt_read_only_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("locked.txt");
        fs::write(&path, b"read only content").unwrap();

        let mut permissions = fs::metadata(&path).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&path, permissions).unwrap();

        // Privileged users can still open the file for writing.
        if OpenOptions::new().write(true).open(&path).is_ok() {
            return;
        }

        let result = Encryption::new(&path, "pw").encrypt();
        assert!(matches!(result, Err(Error::FileRead { .. })));
        assert_eq!(fs::read(&path).unwrap(), b"read only content");
    }

    #[test]
    fn test_wrong_passphrase_leaves_payload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secret.txt");
        fs::write(&path, b"top secret").unwrap();

        Encryption::new(&path, "right").encrypt().unwrap();
        let sealed = fs::read(&path).unwrap();

        let result = Encryption::new(&path, "wrong").decrypt();
        assert!(matches!(result, Err(Error::Authentication)));
        assert_eq!(fs::read(&path).unwrap(), sealed);
    }
}
