//! Domain layer: persons and the genealogy tree
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod display;
pub mod error;
pub mod person;
pub mod tree;

pub use display::{TreeDisplay, Verbose, DELIMITER, END_ADVISEE_DELIMITER, START_ADVISEE_DELIMITER};
pub use error::{DomainError, DomainResult, InvariantViolation};
pub use person::Person;
pub use tree::{GenealogyTree, InsertOutcome};
