//! Player and AI commands.
//!
//! [`Action`] is a closed set of variants, each carrying only its own
//! parameters and dispatched by `match`. Every variant binds one acting actor
//! and goes through the same pipeline: `pre_validate` checks preconditions
//! against the unmodified state, `apply` mutates it. A failure is an
//! [`ActionError`] whose display text is ready for the message log.

mod combat;
mod consumable;
pub mod error;
mod inventory;
mod movement;
mod stairs;
mod wait;

pub use combat::MeleeAction;
pub use consumable::UseItemAction;
pub use error::ActionError;
pub use inventory::{DropAction, EquipAction, PickupAction};
pub use movement::{BumpAction, MoveAction};
pub use stairs::TakeStairsAction;
pub use wait::WaitAction;

use crate::config::GameConfig;
use crate::state::{Direction, Entity, EntityId, GameState, Position};

/// What a successful action asks the turn controller to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A turn was consumed.
    Performed,
    /// A turn was consumed and the floor must be regenerated.
    Descend,
}

/// Defines how a concrete action validates and mutates game state.
pub trait ActionTransition {
    /// The entity performing this action.
    fn actor(&self) -> EntityId;

    /// Checks preconditions against the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _config: &GameConfig) -> Result<(), ActionError> {
        Ok(())
    }

    /// Mutates the state. Assumes `pre_validate` passed.
    fn apply(
        &self,
        state: &mut GameState,
        config: &GameConfig,
    ) -> Result<ActionOutcome, ActionError>;

    /// Validates then applies.
    fn perform(
        &self,
        state: &mut GameState,
        config: &GameConfig,
    ) -> Result<ActionOutcome, ActionError> {
        self.pre_validate(state, config)?;
        self.apply(state, config)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Wait(WaitAction),
    Move(MoveAction),
    Melee(MeleeAction),
    Bump(BumpAction),
    Pickup(PickupAction),
    Drop(DropAction),
    Equip(EquipAction),
    UseItem(UseItemAction),
    TakeStairs(TakeStairsAction),
}

impl Action {
    pub fn wait(actor: EntityId) -> Self {
        Self::Wait(WaitAction::new(actor))
    }

    pub fn step(actor: EntityId, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::Move(MoveAction::new(actor, dx, dy))
    }

    pub fn bump(actor: EntityId, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::Bump(BumpAction::new(actor, dx, dy))
    }

    pub fn melee(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self::Melee(MeleeAction::new(actor, dx, dy))
    }

    pub fn pickup(actor: EntityId) -> Self {
        Self::Pickup(PickupAction::new(actor))
    }

    pub fn drop_item(actor: EntityId, item: EntityId) -> Self {
        Self::Drop(DropAction::new(actor, item))
    }

    pub fn equip(actor: EntityId, item: EntityId) -> Self {
        Self::Equip(EquipAction::new(actor, item))
    }

    pub fn use_item(actor: EntityId, item: EntityId, target: Option<Position>) -> Self {
        Self::UseItem(UseItemAction::new(actor, item, target))
    }

    pub fn take_stairs(actor: EntityId) -> Self {
        Self::TakeStairs(TakeStairsAction::new(actor))
    }

    pub fn as_transition(&self) -> &dyn ActionTransition {
        match self {
            Action::Wait(action) => action,
            Action::Move(action) => action,
            Action::Melee(action) => action,
            Action::Bump(action) => action,
            Action::Pickup(action) => action,
            Action::Drop(action) => action,
            Action::Equip(action) => action,
            Action::UseItem(action) => action,
            Action::TakeStairs(action) => action,
        }
    }
}

impl ActionTransition for Action {
    fn actor(&self) -> EntityId {
        self.as_transition().actor()
    }

    fn pre_validate(&self, state: &GameState, config: &GameConfig) -> Result<(), ActionError> {
        self.as_transition().pre_validate(state, config)
    }

    fn apply(
        &self,
        state: &mut GameState,
        config: &GameConfig,
    ) -> Result<ActionOutcome, ActionError> {
        self.as_transition().apply(state, config)
    }
}

/// Resolves `id` to an actor that is still alive.
pub(crate) fn living_actor(state: &GameState, id: EntityId) -> Result<&Entity, ActionError> {
    let entity = state.map.entity(id).ok_or(ActionError::EntityNotFound(id))?;
    match entity.as_actor() {
        Some(actor) if actor.is_alive() => Ok(entity),
        Some(_) => Err(ActionError::ActorDead(id)),
        None => Err(ActionError::NotAnActor(id)),
    }
}

/// Upper-cases the first character, for sentence-initial names.
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
