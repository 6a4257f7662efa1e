//! Content for the monastery crawl.
//!
//! - [`Catalog`]: player, monster, item and scenery templates
//! - [`SpawnRules`]: floor-scaled spawn weights and per-room limits
//! - [`MonasteryLayout`]: the default [`game_core::LayoutGenerator`]
//! - loaders for TOML configuration and RON catalogs (feature `loaders`)
//!
//! Content never appears in game state directly; templates are cloned into
//! entities when a floor is generated.

pub mod catalog;
pub mod generator;
pub mod spawn;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{Catalog, WELCOME_MESSAGES, welcome_message};
pub use generator::MonasteryLayout;
pub use spawn::{SpawnEntry, SpawnRules};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader};
