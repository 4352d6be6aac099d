//! CLI layer: argument parsing, command dispatch and the command loop

pub mod args;
pub mod commands;
pub mod error;
pub mod output;
pub mod repl;

pub use args::{Cli, Commands, ConfigCommands};
pub use error::{CliError, CliResult};
