//! Floor progression and depth scaling.

use crate::config::GameConfig;
use crate::env::{GenerationParams, PcgRng, RngOracle, compute_seed};

/// Seed-mixing actor slot reserved for world-level rolls.
const WORLD_ROLLER: u32 = u32::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
enum FloorRoll {
    RoomDivisor,
    RoomMinSize,
    RoomSpread,
    Shrink,
    ShrinkWidth,
    ShrinkHeight,
    Reveal,
    WideLight,
    LightRadius,
    Layout,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    /// 1-based once the first floor is generated; 0 before that.
    pub current_floor: u32,
    /// Divine sight: every tile of this floor counts as explored.
    pub reveal_map: bool,
}

/// Everything decided about a floor before its layout exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloorPlan {
    pub params: GenerationParams,
    pub reveal_map: bool,
    /// New player light radius, when the floor overrides it.
    pub light_radius: Option<u32>,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rolls the parameters for the floor after the current one.
    ///
    /// The first floor always uses the full map, no reveal and the player's
    /// own light radius.
    pub fn plan_next_floor(&self, config: &GameConfig, game_seed: u64) -> FloorPlan {
        let floor = self.current_floor + 1;
        let rng = PcgRng;
        let scaling = &config.floor;
        let roll =
            |what: FloorRoll| compute_seed(game_seed, u64::from(floor), WORLD_ROLLER, what as u32);

        let mut map_width = config.map_width;
        let mut map_height = config.map_height;

        let divisor = rng
            .range(
                roll(FloorRoll::RoomDivisor),
                scaling.room_divisor_min,
                scaling.room_divisor_max,
            )
            .max(1);
        let max_rooms = (map_width * map_height).div_ceil(divisor);
        let room_min_size = rng.range(
            roll(FloorRoll::RoomMinSize),
            scaling.room_min_size_min,
            scaling.room_min_size_max,
        );
        let room_max_size = room_min_size
            + rng.range(
                roll(FloorRoll::RoomSpread),
                scaling.room_size_spread_min,
                scaling.room_size_spread_max,
            );

        let mut reveal_map = false;
        let mut light_radius = None;

        if floor > 1 {
            if rng.chance(roll(FloorRoll::Shrink), scaling.shrink_chance) {
                let screen_height = config.map_height + config.hud_rows;
                map_width = rng.range(
                    roll(FloorRoll::ShrinkWidth),
                    config.map_width / 4,
                    config.map_width,
                );
                map_height = rng
                    .range(roll(FloorRoll::ShrinkHeight), screen_height / 4, screen_height)
                    .saturating_sub(config.hud_rows)
                    .max(config.hud_rows * 2)
                    .min(config.map_height);
            }

            reveal_map = rng.chance(roll(FloorRoll::Reveal), scaling.reveal_chance);

            let radius = if rng.chance(roll(FloorRoll::WideLight), scaling.wide_light_chance) {
                rng.range(
                    roll(FloorRoll::LightRadius),
                    scaling.wide_light_radius_min,
                    scaling.wide_light_radius_max,
                )
            } else {
                rng.range(
                    roll(FloorRoll::LightRadius),
                    scaling.light_radius_min,
                    scaling.light_radius_max,
                )
            };
            light_radius = Some(radius);
        }

        FloorPlan {
            params: GenerationParams {
                floor,
                max_rooms,
                room_min_size,
                room_max_size,
                map_width,
                map_height,
                seed: roll(FloorRoll::Layout),
            },
            reveal_map,
            light_radius,
        }
    }
}
