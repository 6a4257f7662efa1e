//! Entity catalog loader.

use std::path::Path;

use crate::catalog::Catalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for [`Catalog`] RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        let catalog: Catalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        Self::validate(&catalog)?;
        Ok(catalog)
    }

    /// Every name referenced by the spawn tables and starting gear must
    /// resolve to a template.
    pub fn validate(catalog: &Catalog) -> LoadResult<()> {
        if !catalog.player.is_actor() {
            anyhow::bail!("Player template '{}' is not an actor", catalog.player.name);
        }

        let spawns = &catalog.spawns;
        for entry in &spawns.monsters {
            if catalog.monster(&entry.template).is_none() {
                anyhow::bail!("Spawn table references unknown monster '{}'", entry.template);
            }
        }
        for entry in &spawns.items {
            if catalog.item(&entry.template).is_none() {
                anyhow::bail!("Spawn table references unknown item '{}'", entry.template);
            }
        }
        for name in &catalog.starting_gear {
            if catalog.item(name).is_none() {
                anyhow::bail!("Starting gear references unknown item '{}'", name);
            }
        }
        Ok(())
    }
}
