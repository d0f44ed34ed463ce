//! Domain-level error types.

use std::fmt;

use thiserror::Error;

/// The rule a rejected field value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// A required value was empty.
    Required,
    /// Another record already holds the value.
    Duplicate,
    /// The value is too short or too long.
    Length,
    /// The value has the wrong shape (e.g. non-digit characters).
    Format,
    /// The value is not one of the allowed choices.
    Enumeration,
    /// None of the required marker phrases appear in the value.
    MissingKeyword,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Violation::Required => "required",
            Violation::Duplicate => "duplicate",
            Violation::Length => "length",
            Violation::Format => "format",
            Violation::Enumeration => "enumeration",
            Violation::MissingKeyword => "missing-keyword",
        };
        f.write_str(name)
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidField {
        field: &'static str,
        violation: Violation,
        reason: String,
    },

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i32 },

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl DomainError {
    pub fn invalid(field: &'static str, violation: Violation, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            violation,
            reason: reason.into(),
        }
    }

    /// The violated rule, if this is a field validation failure.
    pub fn violation(&self) -> Option<Violation> {
        match self {
            Self::InvalidField { violation, .. } => Some(*violation),
            _ => None,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_message() {
        let err = DomainError::invalid("name", Violation::Required, "Name is required.");
        assert_eq!(err.to_string(), "Invalid value for name: Name is required.");
        assert_eq!(err.violation(), Some(Violation::Required));
    }

    #[test]
    fn test_repo_error_is_not_a_violation() {
        let err: DomainError = RepoError::NotFound.into();
        assert_eq!(err.violation(), None);
        assert_eq!(err.to_string(), "Entity not found");
    }
}
