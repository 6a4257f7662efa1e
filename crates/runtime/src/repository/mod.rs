//! Persistence for whole-session snapshots.
//!
//! A save is one opaque blob per slot: the full [`game_core::GameState`]
//! wrapped in a [`SaveFile`] envelope. There is no incremental persistence.

mod error;
mod file;
mod memory;
mod save_file;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::MemorySaveRepository;
pub use save_file::SaveFile;

use game_core::GameState;

/// Slot-addressed storage for session snapshots.
pub trait SaveRepository: Send + Sync {
    fn save(&self, slot: &str, state: &GameState) -> Result<()>;

    /// `Ok(None)` when the slot has never been written.
    fn load(&self, slot: &str) -> Result<Option<GameState>>;

    fn exists(&self, slot: &str) -> bool;

    fn delete(&self, slot: &str) -> Result<()>;

    fn list_slots(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}
