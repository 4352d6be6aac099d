//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::person::Person;

/// Domain errors represent lookups and identities that cannot be satisfied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("not found in tree: {0}")]
    NotFound(Person),

    #[error("invalid name (expected \"<given> <family>\"): {0:?}")]
    InvalidName(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Broken structural invariant, reported by `GenealogyTree::verify`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("person {0} occurs more than once")]
    DuplicatePerson(Person),

    #[error("advisees of {advisor} are not strictly ordered")]
    UnorderedAdvisees { advisor: Person },
}
