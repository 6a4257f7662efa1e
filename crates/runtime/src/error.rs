//! Error types surfaced by the runtime API.
//!
//! [`SessionError`] is what a single intent can produce. [`RuntimeError`]
//! wraps the failures around a session: setup, persistence and engine
//! faults that a client must report but can survive.
use thiserror::Error;

use game_core::{ErrorSeverity, GameError, TurnError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Player-initiated exit. `save` asks the caller to persist first.
    #[error("player quit (save: {save})")]
    Quit { save: bool },

    /// Engine fault that is not an impossible action. The session state is
    /// still consistent and play may continue.
    #[error(transparent)]
    Engine(#[from] TurnError),
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Quit { .. } => ErrorSeverity::Fatal,
            Self::Engine(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Quit { .. } => "SESSION_QUIT",
            Self::Engine(error) => error.error_code(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("failed to set up the first floor")]
    Setup(#[source] TurnError),

    #[error(transparent)]
    Session(#[from] SessionError),
}
