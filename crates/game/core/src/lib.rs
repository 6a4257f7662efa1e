//! Deterministic rules for the dungeon crawl.
//!
//! `game-core` owns the state model (map, entities, fighters), the action
//! pipeline, consumable effects, enemy AI and the turn/floor controller. It
//! performs no I/O: randomness comes from a seeded PCG and new floors come
//! from a [`env::LayoutGenerator`] supplied by the caller. All turn-level
//! mutation flows through [`engine::GameEngine`].
pub mod action;
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod palette;
pub mod progression;
pub mod state;

#[cfg(test)]
mod test_utils;

pub use action::{Action, ActionError, ActionOutcome, ActionTransition};
pub use config::{FloorScaling, GameConfig};
pub use engine::{GameEngine, TurnError, TurnOutcome};
pub use env::{
    GeneratedFloor, GenerationError, GenerationParams, LayoutGenerator, PcgRng, RngOracle,
    RngStream, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use progression::StatChoice;
pub use state::{
    ActorComponents, AiState, Appearance, ConsumableEffect, CrossArms, Direction, Entity,
    EntityId, EntityKind, Equipment, EquipmentSlot, Equippable, Fighter, GameMap, GameState,
    IdAllocator, Inventory, ItemComponents, Level, Message, MessageLog, Position, RenderOrder,
    SceneryKind, TargetShape, TargetingMode, Tile, WorldState,
};
