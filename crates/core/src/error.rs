//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants). Persistence failures belong to the infra layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty item name, non-finite quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_message_is_prefixed() {
        let err = DomainError::invariant("quantity overflow");
        assert_eq!(err.to_string(), "invariant violated: quantity overflow");
    }

    #[test]
    fn validation_message_is_prefixed() {
        let err = DomainError::validation("item name cannot be empty");
        assert_eq!(err.to_string(), "validation failed: item name cannot be empty");
    }
}
