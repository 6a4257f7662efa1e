use crate::config::GameConfig;
use crate::palette;
use crate::state::{EntityId, GameState, Position, SceneryKind};

use super::{ActionError, ActionOutcome, ActionTransition, MeleeAction, living_actor};

const STAIRS_UP_MESSAGE: &str = "Sunlight and the village tempt you, but duty calls";

/// Destination of a directional action relative to the actor.
fn destination(
    state: &GameState,
    actor: EntityId,
    dx: i32,
    dy: i32,
) -> Result<Position, ActionError> {
    Ok(living_actor(state, actor)?.position.offset(dx, dy))
}

/// Steps by `(dx, dy)` onto a free walkable tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

impl MoveAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }
}

impl ActionTransition for MoveAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), ActionError> {
        let target = destination(state, self.actor, self.dx, self.dy)?;

        // Out of bounds and unwalkable tiles are both reported as blocked.
        if !state.map.walkable(target) || state.map.blocking_entity_at(target).is_some() {
            return Err(ActionError::Blocked);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<ActionOutcome, ActionError> {
        let entity = state
            .map
            .entity_mut(self.actor)
            .ok_or(ActionError::EntityNotFound(self.actor))?;
        entity.position = entity.position.offset(self.dx, self.dy);
        Ok(ActionOutcome::Performed)
    }
}

/// Directional intent: attack if a living actor is there, otherwise move.
///
/// Bumping into the stairs-up marker prints its flavour text first and then
/// moves onto it as usual.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BumpAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

impl BumpAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }

    /// The concrete action this bump resolves to.
    fn resolve(&self, state: &GameState) -> Result<Resolved, ActionError> {
        let target = destination(state, self.actor, self.dx, self.dy)?;

        if state.map.actor_at(target).is_some() {
            return Ok(Resolved::Melee(MeleeAction::new(self.actor, self.dx, self.dy)));
        }

        let stairs_up = state
            .map
            .entities_at(target)
            .any(|entity| entity.scenery_kind() == Some(SceneryKind::StairsUp));
        Ok(Resolved::Move {
            action: MoveAction::new(self.actor, self.dx, self.dy),
            stairs_up,
        })
    }
}

enum Resolved {
    Melee(MeleeAction),
    Move { action: MoveAction, stairs_up: bool },
}

impl ActionTransition for BumpAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), ActionError> {
        self.resolve(state).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut GameState,
        config: &GameConfig,
    ) -> Result<ActionOutcome, ActionError> {
        match self.resolve(state)? {
            Resolved::Melee(melee) => melee.perform(state, config),
            Resolved::Move { action, stairs_up } => {
                if stairs_up {
                    state.message(STAIRS_UP_MESSAGE, palette::WELCOME_TEXT);
                }
                action.perform(state, config)
            }
        }
    }
}
