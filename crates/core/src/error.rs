//! Domain error model.

use thiserror::Error;

/// Result type used across the vending domain.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only caller mistakes are reported here. Lookup misses, insufficient funds
/// and empty stock are ordinary outcomes and are returned as `false` by the
/// catalogue operations instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument was rejected before the operation was attempted
    /// (e.g. a negative quantity).
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
    fn messages_carry_context() {
        let err = DomainError::invalid_argument("quantity must be non-negative");
        assert_eq!(err.to_string(), "invalid argument: quantity must be non-negative");
    }

    #[test]
    fn invalid_argument_is_the_only_class() {
        match DomainError::invalid_argument("x") {
            DomainError::InvalidArgument(msg) => assert_eq!(msg, "x"),
        }
    }
}
