//! Application services

pub mod genealogy;

pub use genealogy::{GenealogyService, Response};
