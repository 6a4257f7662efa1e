//! Authoritative game state.
//!
//! [`GameState`] is the single snapshot handed to persistence: the current
//! floor's map (with every entity on it), world progression, turn counters
//! and the message log. Mutation goes through [`crate::engine::GameEngine`].
pub mod fov;
pub mod log;
pub mod map;
pub mod types;
pub mod world;

pub use log::{Message, MessageLog};
pub use map::{GameMap, Tile, TileFlags, TileGlyph};
pub use types::{
    ActorComponents, AiState, Appearance, CombatBonus, ConsumableEffect, CrossArms, DamageTaken,
    Direction, Entity, EntityId, EntityKind, Equipment, EquipmentSlot, Equippable, Fighter,
    IdAllocator, Inventory, ItemComponents, Level, Position, RenderOrder, SceneryKind,
    TargetShape, TargetingMode, TurnState,
};
pub use world::{FloorPlan, WorldState};

use crate::palette::Rgb;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Set once at game start. Combined with `turn.nonce` for every roll.
    pub game_seed: u64,
    pub ids: IdAllocator,
    pub turn: TurnState,
    pub map: GameMap,
    pub world: WorldState,
    pub log: MessageLog,
}

impl GameState {
    /// Wraps an initial map. The player must already be on it.
    pub fn new(game_seed: u64, map: GameMap) -> Self {
        Self {
            game_seed,
            ids: IdAllocator::new(),
            turn: TurnState::new(),
            map,
            world: WorldState::new(),
            log: MessageLog::default(),
        }
    }

    pub fn player(&self) -> Option<&Entity> {
        self.map.player()
    }

    pub fn player_mut(&mut self) -> Option<&mut Entity> {
        self.map.player_mut()
    }

    pub fn player_alive(&self) -> bool {
        self.player().is_some_and(Entity::is_alive)
    }

    /// Appends a message stamped with the current turn.
    pub fn message(&mut self, text: impl Into<String>, color: Rgb) {
        self.log.add(text, color, self.turn.turn);
    }
}
