//! Build errors for transition builders.

use thiserror::Error;

/// Errors that can occur when building transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Transition name must not be empty")]
    EmptyName,

    #[error("Transition '{name}' has no origin state. Call .from(state)")]
    MissingOrigin { name: String },

    #[error("Transition '{name}' has no destination state. Call .to(state)")]
    MissingDestination { name: String },
}
