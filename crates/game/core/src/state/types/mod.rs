pub mod ai;
pub mod common;
pub mod entity;
pub mod equipment;
pub mod fighter;
pub mod inventory;
pub mod item;
pub mod level;
pub mod turn;

pub use ai::AiState;
pub use common::{Direction, EntityId, IdAllocator, Position, RenderOrder};
pub use entity::{ActorComponents, Appearance, Entity, EntityKind, SceneryKind};
pub use equipment::{Equipment, EquipmentSlot, Equippable};
pub use fighter::{CombatBonus, DamageTaken, Fighter};
pub use inventory::Inventory;
pub use item::{ConsumableEffect, CrossArms, ItemComponents, TargetShape, TargetingMode};
pub use level::Level;
pub use turn::TurnState;
