//! Error classification shared by every crate in the workspace.
//!
//! Concrete errors live beside the code that raises them (`ActionError` in
//! `action`, `GenerationError` in `env`, `TurnError` in `engine`). They all
//! implement [`GameError`] so callers can route on severity without matching
//! each enum.

/// How the turn boundary treats an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// A rule said no. The reason goes to the message log.
    Recoverable,
    /// The request referenced something that does not exist.
    Validation,
    /// The state disagrees with itself.
    Internal,
    /// The session ends.
    Fatal,
}

impl ErrorSeverity {
    /// Lowercase label for structured log fields.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }
}

pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier used in log fields. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
