//! Gate error types.

use thiserror::Error;

/// Message used when a declaration names neither an OS nor an architecture.
pub const EMPTY_DECLARATION_MESSAGE: &str =
    "You must declare at least one OS or architecture in @DisabledOnOs";

/// Errors raised while evaluating a declaration.
///
/// These are setup faults in the declaration itself, never skip decisions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// The declaration is malformed.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Result type for gate operations.
pub type GateResult<T> = Result<T, GateError>;

impl GateError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn empty_declaration() -> Self {
        Self::configuration(EMPTY_DECLARATION_MESSAGE)
    }

    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
