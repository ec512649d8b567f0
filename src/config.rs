//! Configuration constants for passcrypt.

/// AES-256 key size in bytes.
pub const KEY_SIZE: usize = 32;

/// Nonce size for AES-GCM (96 bits).
pub const NONCE_SIZE: usize = 12;

/// Authentication tag size (128 bits).
pub const TAG_SIZE: usize = 16;

/// Header parameters for the file-type heuristic.
pub mod header {
    /// Offset of the first inspected byte.
    pub const WINDOW_START: usize = 1;

    /// Number of inspected bytes.
    pub const WINDOW_LEN: usize = 3;

    /// Lowercased markers that cause a file to be rejected.
    pub const BLOCKED: [&str; 2] = ["exe", "elf"];

    /// Smallest file the heuristic can inspect.
    pub const MIN_FILE_LEN: usize = WINDOW_START + WINDOW_LEN;
}
