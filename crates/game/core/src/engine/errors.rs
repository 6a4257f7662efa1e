//! Errors surfaced by the turn controller.

use crate::action::ActionError;
use crate::env::GenerationError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    /// The player's action was impossible. Nothing happened.
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("floor generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("the player is missing from the map")]
    PlayerMissing,

    #[error("{0} is not the player")]
    NotPlayerAction(EntityId),
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Action(error) => error.severity(),
            Self::Generation(error) => error.severity(),
            Self::PlayerMissing => ErrorSeverity::Internal,
            Self::NotPlayerAction(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Action(error) => error.error_code(),
            Self::Generation(error) => error.error_code(),
            Self::PlayerMissing => "TURN_PLAYER_MISSING",
            Self::NotPlayerAction(_) => "TURN_NOT_PLAYER_ACTION",
        }
    }
}
