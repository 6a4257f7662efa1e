//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`GameConfig`] TOML files.
///
/// Every field is optional; missing keys keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.map_width == 0 || config.map_height == 0 {
            anyhow::bail!(
                "Map dimensions must be positive, got {}x{}",
                config.map_width,
                config.map_height
            );
        }
        if config.inventory_capacity == 0 {
            anyhow::bail!("Inventory capacity must be at least 1");
        }

        Ok(config)
    }
}
