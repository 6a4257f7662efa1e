//! In-memory SaveRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use game_core::GameState;

use super::{RepositoryError, Result, SaveFile, SaveRepository};

/// Keeps sealed [`SaveFile`]s so loads go through the same integrity checks
/// as the file repository.
#[derive(Default)]
pub struct MemorySaveRepository {
    saves: RwLock<HashMap<String, SaveFile>>,
}

impl MemorySaveRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces a slot's raw envelope. Used to simulate corruption.
    pub fn put_raw(&self, slot: &str, file: SaveFile) -> Result<()> {
        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        saves.insert(slot.to_owned(), file);
        Ok(())
    }

    pub fn raw(&self, slot: &str) -> Result<Option<SaveFile>> {
        let saves = self
            .saves
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(saves.get(slot).cloned())
    }
}

impl SaveRepository for MemorySaveRepository {
    fn save(&self, slot: &str, state: &GameState) -> Result<()> {
        let file = SaveFile::seal(state)?;
        self.put_raw(slot, file)
    }

    fn load(&self, slot: &str) -> Result<Option<GameState>> {
        self.raw(slot)?.map(|file| file.open()).transpose()
    }

    fn exists(&self, slot: &str) -> bool {
        self.saves
            .read()
            .map(|saves| saves.contains_key(slot))
            .unwrap_or(false)
    }

    fn delete(&self, slot: &str) -> Result<()> {
        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        saves.remove(slot);
        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<String>> {
        let saves = self
            .saves
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut slots: Vec<String> = saves.keys().cloned().collect();
        slots.sort_unstable();
        Ok(slots)
    }
}
