//! Person identity: the key every tree operation compares on

use std::cmp::Ordering;
use std::fmt;

use crate::domain::error::{DomainError, DomainResult};

/// An academic, identified by given and family name.
///
/// Equality uses both names. Ordering is lexicographic over
/// (family, given), so advisees sort by family name first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    given: String,
    family: String,
}

impl Person {
    pub fn new(given: impl Into<String>, family: impl Into<String>) -> Self {
        Self {
            given: given.into(),
            family: family.into(),
        }
    }

    /// Parse a full name such as `"Amy Huang"`.
    ///
    /// The first whitespace-separated token is the given name, the remaining
    /// tokens (joined by a single space) form the family name.
    pub fn parse_full_name(full_name: &str) -> DomainResult<Self> {
        let mut tokens = full_name.split_whitespace();
        let given = tokens
            .next()
            .ok_or_else(|| DomainError::InvalidName(full_name.to_string()))?;
        let family = itertools::join(tokens, " ");
        if family.is_empty() {
            return Err(DomainError::InvalidName(full_name.to_string()));
        }
        Ok(Self::new(given, family))
    }

    pub fn given(&self) -> &str {
        &self.given
    }

    pub fn family(&self) -> &str {
        &self.family
    }
}

impl Ord for Person {
    fn cmp(&self, other: &Self) -> Ordering {
        self.family
            .cmp(&other.family)
            .then_with(|| self.given.cmp(&other.given))
    }
}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.given, self.family)
    }
}
