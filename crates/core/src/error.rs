//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure here is a rejected argument: a non-positive amount, a
/// withdrawal past the available funds, an impossible dimension. There is no
/// IO anywhere in the workspace, so there are no transient failures to model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An operation was handed an argument it cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_formats_message() {
        let err = DomainError::invalid_argument("amount must be positive");
        assert_eq!(err.to_string(), "invalid argument: amount must be positive");
    }
}
