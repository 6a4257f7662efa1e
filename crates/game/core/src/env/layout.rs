//! Boundary to the dungeon layout generator.
//!
//! Room carving and corridor connection live behind [`LayoutGenerator`]; the
//! engine only hands over parameters and takes back a populated map.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameMap, IdAllocator, Position};

/// Inputs for one floor, already scaled by depth.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationParams {
    /// 1-based floor index being generated.
    pub floor: u32,
    pub max_rooms: u32,
    pub room_min_size: u32,
    pub room_max_size: u32,
    pub map_width: u32,
    pub map_height: u32,
    /// Seed for every random choice the generator makes.
    pub seed: u64,
}

/// A populated floor, without the player.
#[derive(Clone, Debug)]
pub struct GeneratedFloor {
    /// Tiles, monsters, items and the downstairs tile.
    pub map: GameMap,
    /// Where the player arrives.
    pub player_start: Position,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("map {width}x{height} is too small to hold a room")]
    MapTooSmall { width: u32, height: u32 },

    #[error("no walkable tile available for the player")]
    NoStartPosition,

    #[error("layout generation failed: {0}")]
    Failed(String),
}

impl GameError for GenerationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MapTooSmall { .. } => "GENERATION_MAP_TOO_SMALL",
            Self::NoStartPosition => "GENERATION_NO_START",
            Self::Failed(_) => "GENERATION_FAILED",
        }
    }
}

/// Produces floors from generation parameters.
///
/// Implementations must allocate entity ids from `ids` so they never collide
/// with entities already in the session.
pub trait LayoutGenerator {
    fn generate(
        &self,
        params: &GenerationParams,
        ids: &mut IdAllocator,
    ) -> Result<GeneratedFloor, GenerationError>;
}

impl<G: LayoutGenerator + ?Sized> LayoutGenerator for &G {
    fn generate(
        &self,
        params: &GenerationParams,
        ids: &mut IdAllocator,
    ) -> Result<GeneratedFloor, GenerationError> {
        (**self).generate(params, ids)
    }
}

impl<G: LayoutGenerator + ?Sized> LayoutGenerator for Box<G> {
    fn generate(
        &self,
        params: &GenerationParams,
        ids: &mut IdAllocator,
    ) -> Result<GeneratedFloor, GenerationError> {
        (**self).generate(params, ids)
    }
}
