//! Session runtime for the monastery crawl.
//!
//! This crate wraps the deterministic engine from `game-core` into something
//! a UI can drive:
//! - [`session`] hosts the turn/world controller and its input modes
//! - [`intent`] defines the decoded inputs the session accepts
//! - [`repository`] persists whole-session snapshots
//! - [`error`] holds the runtime error taxonomy
pub mod error;
pub mod intent;
pub mod repository;
pub mod session;

pub use error::{Result, RuntimeError, SessionError};
pub use intent::{Intent, Mode};
pub use repository::{
    FileSaveRepository, MemorySaveRepository, RepositoryError, SaveFile, SaveRepository,
};
pub use session::{Session, TurnReport};
