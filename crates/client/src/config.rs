//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

/// Composition-root settings. Game rules live in `GameConfig`, not here.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Fixed game seed; a random one is drawn when unset.
    pub seed: Option<u64>,
    /// Save slot name; also names the log directory.
    pub session_id: String,
    pub save_dir: PathBuf,
    pub log_dir: PathBuf,
    /// Optional TOML file overriding `GameConfig` defaults.
    pub config_path: Option<PathBuf>,
    /// Optional RON catalog replacing the built-in content.
    pub catalog_path: Option<PathBuf>,
    /// Variables that were set but failed to parse. Logged once logging is up.
    pub ignored: Vec<&'static str>,
}

impl ClientConfig {
    /// Environment variables:
    /// - `DUNGEON_SEED` - game seed for new sessions
    /// - `DUNGEON_SESSION_ID` - save slot / log directory name (default: `default`)
    /// - `DUNGEON_SAVE_DIR` - where saves go (default: platform data dir)
    /// - `DUNGEON_LOG_DIR` - where logs go (default: platform cache dir)
    /// - `DUNGEON_CONFIG` - path to a game config TOML
    /// - `DUNGEON_CATALOG` - path to a content catalog RON
    pub fn from_env() -> Self {
        let dirs = ProjectDirs::from("", "", "dungeon");
        let default_dir = |pick: fn(&ProjectDirs) -> PathBuf, leaf: &str| {
            dirs.as_ref()
                .map(pick)
                .unwrap_or_else(|| env::temp_dir().join("dungeon"))
                .join(leaf)
        };

        let mut ignored = Vec::new();
        let seed = read_env("DUNGEON_SEED", &mut ignored);
        let session_id =
            read_env("DUNGEON_SESSION_ID", &mut ignored).unwrap_or_else(|| "default".to_owned());
        let save_dir = read_env("DUNGEON_SAVE_DIR", &mut ignored)
            .unwrap_or_else(|| default_dir(|d| d.data_dir().to_path_buf(), "saves"));
        let log_dir = read_env("DUNGEON_LOG_DIR", &mut ignored)
            .unwrap_or_else(|| default_dir(|d| d.cache_dir().to_path_buf(), "logs"));
        let config_path = read_env("DUNGEON_CONFIG", &mut ignored);
        let catalog_path = read_env("DUNGEON_CATALOG", &mut ignored);

        Self {
            seed,
            session_id,
            save_dir,
            log_dir,
            config_path,
            catalog_path,
            ignored,
        }
    }
}

fn read_env<T>(key: &'static str, ignored: &mut Vec<&'static str>) -> Option<T>
where
    T: std::str::FromStr,
{
    parse_env(key, env::var(key).ok(), ignored)
}

/// `None` when unset; records `key` in `ignored` when set but unparsable.
fn parse_env<T>(
    key: &'static str,
    value: Option<String>,
    ignored: &mut Vec<&'static str>,
) -> Option<T>
where
    T: std::str::FromStr,
{
    let parsed = value?.parse().ok();
    if parsed.is_none() {
        ignored.push(key);
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_seed_is_recorded() {
        let mut ignored = Vec::new();
        let seed: Option<u64> = parse_env("DUNGEON_SEED", Some("forty-two".into()), &mut ignored);
        assert_eq!(seed, None);
        assert_eq!(ignored, vec!["DUNGEON_SEED"]);
    }

    #[test]
    fn unset_and_valid_values_are_not_recorded() {
        let mut ignored = Vec::new();
        let unset: Option<u64> = parse_env("DUNGEON_SEED", None, &mut ignored);
        let seed: Option<u64> = parse_env("DUNGEON_SEED", Some("42".into()), &mut ignored);
        assert_eq!(unset, None);
        assert_eq!(seed, Some(42));
        assert!(ignored.is_empty());
    }
}
