//! Action failures.
//!
//! Every variant's `Display` is the exact line written to the message log, so
//! the turn boundary can report a failure without further formatting.

use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

/// An action whose preconditions did not hold. No turn is consumed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    // ----- movement / combat -----
    #[error("That way is blocked.")]
    Blocked,

    #[error("Nothing to attack.")]
    NothingToAttack,

    #[error("There are no stairs here.")]
    NoStairs,

    // ----- inventory -----
    #[error("Your inventory is full.")]
    InventoryFull,

    #[error("There is nothing here to pick up.")]
    NothingToPickUp,

    #[error("You have nowhere to carry items.")]
    NoInventory,

    #[error("You are not carrying that.")]
    ItemNotCarried,

    #[error("The {0} cannot be used.")]
    NotConsumable(String),

    #[error("The {0} cannot be equipped.")]
    NotEquippable(String),

    // ----- consumables -----
    #[error("Your HP is already full")]
    HealthFull,

    #[error("You cannot target an area that you cannot see")]
    TargetNotVisible,

    #[error("You must select an enemy to target")]
    NoEnemyTargeted,

    #[error("You cannot confuse yourself")]
    CannotConfuseSelf,

    #[error("There are no targets in the radius")]
    NoTargetsInArea,

    #[error("No enemy is close enough to strike")]
    NoEnemyInRange,

    // ----- progression -----
    #[error("You are not ready to advance.")]
    NoLevelUpPending,

    // ----- bookkeeping -----
    #[error("{0} cannot act: it is dead.")]
    ActorDead(EntityId),

    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("entity {0} is not an actor")]
    NotAnActor(EntityId),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ItemNotCarried
            | Self::NotConsumable(_)
            | Self::NotEquippable(_)
            | Self::NoLevelUpPending
            | Self::ActorDead(_) => ErrorSeverity::Validation,
            Self::EntityNotFound(_) | Self::NotAnActor(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Blocked => "ACTION_BLOCKED",
            Self::NothingToAttack => "ACTION_NOTHING_TO_ATTACK",
            Self::NoStairs => "ACTION_NO_STAIRS",
            Self::InventoryFull => "ACTION_INVENTORY_FULL",
            Self::NothingToPickUp => "ACTION_NOTHING_TO_PICK_UP",
            Self::NoInventory => "ACTION_NO_INVENTORY",
            Self::ItemNotCarried => "ACTION_ITEM_NOT_CARRIED",
            Self::NotConsumable(_) => "ACTION_NOT_CONSUMABLE",
            Self::NotEquippable(_) => "ACTION_NOT_EQUIPPABLE",
            Self::HealthFull => "ACTION_HEALTH_FULL",
            Self::TargetNotVisible => "ACTION_TARGET_NOT_VISIBLE",
            Self::NoEnemyTargeted => "ACTION_NO_ENEMY_TARGETED",
            Self::CannotConfuseSelf => "ACTION_CANNOT_CONFUSE_SELF",
            Self::NoTargetsInArea => "ACTION_NO_TARGETS_IN_AREA",
            Self::NoEnemyInRange => "ACTION_NO_ENEMY_IN_RANGE",
            Self::NoLevelUpPending => "ACTION_NO_LEVEL_UP",
            Self::ActorDead(_) => "ACTION_ACTOR_DEAD",
            Self::EntityNotFound(_) => "ACTION_ENTITY_NOT_FOUND",
            Self::NotAnActor(_) => "ACTION_NOT_AN_ACTOR",
        }
    }
}
