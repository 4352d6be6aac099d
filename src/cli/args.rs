//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Academic genealogy explorer: advisors, lineages and common ancestors
#[derive(Parser, Debug)]
#[command(name = "phdtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding a local .phdtree.toml (default: cwd)
    #[arg(
        short = 'C',
        long,
        global = true,
        env = "PHDTREE_CONFIG_DIR",
        value_hint = ValueHint::DirPath
    )]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read commands interactively or from a script (default)
    Run {
        /// Read commands from this file instead of stdin
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        input: Option<PathBuf>,
        /// Genealogy CSV (advisee,year,advisor)
        #[arg(value_hint = ValueHint::FilePath)]
        csv: Option<PathBuf>,
    },

    /// Execute a single command, e.g. `phdtree exec lineage Amy Huang`
    Exec {
        /// Genealogy CSV (advisee,year,advisor)
        #[arg(short = 'f', long = "file", value_hint = ValueHint::FilePath)]
        csv: Option<PathBuf>,
        /// Command words
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Print a config template
    Template,
    /// Show config file locations
    Path,
}
