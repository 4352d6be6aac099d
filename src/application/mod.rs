//! Application layer: ingestion, command language and query service
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod command;
pub mod error;
pub mod error_ext;
pub mod loader;
pub mod services;

pub use command::{Command, CommandError};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use loader::{GenealogyLoader, LoadReport, LoadedGenealogy, SkippedRecord};
