use crate::config::GameConfig;
use crate::palette;
use crate::state::{EntityId, GameState};

use super::{ActionError, ActionOutcome, ActionTransition, living_actor};

/// Descends when standing on the floor's downstairs tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TakeStairsAction {
    pub actor: EntityId,
}

impl TakeStairsAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for TakeStairsAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), ActionError> {
        let entity = living_actor(state, self.actor)?;
        if entity.position != state.map.downstairs() {
            return Err(ActionError::NoStairs);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<ActionOutcome, ActionError> {
        state.message("You descend the staircase.", palette::DESCEND);
        Ok(ActionOutcome::Descend)
    }
}
