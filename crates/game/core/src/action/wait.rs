use crate::config::GameConfig;
use crate::state::{EntityId, GameState};

use super::{ActionError, ActionOutcome, ActionTransition, living_actor};

/// Does nothing and always succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaitAction {
    pub actor: EntityId,
}

impl WaitAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for WaitAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), ActionError> {
        living_actor(state, self.actor).map(|_| ())
    }

    fn apply(
        &self,
        _state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<ActionOutcome, ActionError> {
        Ok(ActionOutcome::Performed)
    }
}
