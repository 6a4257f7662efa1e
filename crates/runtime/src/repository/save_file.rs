//! On-disk envelope for a saved session.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use game_core::GameState;

use super::{RepositoryError, Result};

/// `payload` is the bincode encoding of a [`GameState`]; `digest` is its
/// SHA-256.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    pub version: u32,
    pub digest: [u8; 32],
    pub payload: Vec<u8>,
}

impl SaveFile {
    pub const VERSION: u32 = 1;

    pub fn seal(state: &GameState) -> Result<Self> {
        let payload =
            bincode::serialize(state).map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        Ok(Self {
            version: Self::VERSION,
            digest: Sha256::digest(&payload).into(),
            payload,
        })
    }

    /// Verifies version and digest, then decodes the state.
    pub fn open(&self) -> Result<GameState> {
        if self.version != Self::VERSION {
            return Err(RepositoryError::UnsupportedVersion {
                found: self.version,
                expected: Self::VERSION,
            });
        }

        let actual: [u8; 32] = Sha256::digest(&self.payload).into();
        if actual != self.digest {
            return Err(RepositoryError::CorruptedData(
                "payload digest mismatch".into(),
            ));
        }

        bincode::deserialize(&self.payload)
            .map_err(|e| RepositoryError::CorruptedData(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| RepositoryError::Serialization(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| RepositoryError::CorruptedData(e.to_string()))
    }
}
