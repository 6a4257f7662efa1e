use thiserror::Error;

/// Failures while storing or restoring a snapshot.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("in-memory save store is poisoned")]
    LockPoisoned,

    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode snapshot: {0}")]
    Serialization(String),

    /// Digest mismatch or an undecodable blob.
    #[error("save data is corrupted: {0}")]
    CorruptedData(String),

    #[error("save format v{found} is not supported (this build reads v{expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("save slot {0:?} may only contain letters, digits, '-' and '_'")]
    InvalidSlot(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
