//! Domain error model.

use thiserror::Error;

/// Classification of a domain failure.
///
/// The HTTP layer maps each class to exactly one status code, so two errors of
/// the same class are only distinguishable by their message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    InvalidInput,
    Unauthorized,
    Forbidden,
}

/// Domain-level error.
///
/// The message is user-facing: it is rendered verbatim in error responses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or invalid input (e.g. unparsable identifier, bad token format).
    #[error("{0}")]
    InvalidInput(String),

    /// The caller is not authenticated, or its credentials failed policy checks.
    #[error("{0}")]
    Unauthorized(String),

    /// The caller is authenticated but not allowed to perform the operation.
    #[error("{0}")]
    Forbidden(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn error_type(&self) -> ErrorType {
        match self {
            Self::InvalidInput(_) => ErrorType::InvalidInput,
            Self::Unauthorized(_) => ErrorType::Unauthorized,
            Self::Forbidden(_) => ErrorType::Forbidden,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput(m) | Self::Unauthorized(m) | Self::Forbidden(m) => m,
        }
    }
}
