//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid repository '{0}': expected the format 'owner/repo'")]
    InvalidRepository(String),

    #[error("Invalid thread number {0}: must be a positive integer")]
    InvalidThreadNumber(u64),

    #[error("Command '{0}' is not implemented.")]
    UnsupportedCommand(String),

    #[error("Invalid revision transition: {event} while {state}")]
    InvalidTransition { state: String, event: String },
}

impl DomainError {
    /// Errors caused by bad command-line input rather than runtime state
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidRepository(_)
                | DomainError::InvalidThreadNumber(_)
                | DomainError::UnsupportedCommand(_)
        )
    }
}
