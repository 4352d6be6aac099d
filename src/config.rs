//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/phdtree/phdtree.toml`
//! 3. Local config: `<dir>/.phdtree.toml` (defaults to the working directory)
//! 4. Environment variables: `PHDTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::util::path::expand_path;

/// Default genealogy file, relative to the working directory.
pub const DEFAULT_CSV_FILE: &str = "professors.csv";

/// Default prompt of the interactive shell.
pub const DEFAULT_PROMPT: &str = "Please enter a command: ";

/// Unified configuration for phdtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Genealogy CSV read when no file is given on the command line
    pub csv_file: PathBuf,
    /// Prompt printed before each command in interactive mode
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            csv_file: PathBuf::from(DEFAULT_CSV_FILE),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

/// Get the XDG config directory for phdtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "phdtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("phdtree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".phdtree.toml")
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Directory searched for `.phdtree.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("csv_file", defaults.csv_file.to_string_lossy().to_string())
            .map_err(config_err)?
            .set_default("prompt", defaults.prompt)
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            builder = builder.add_source(File::from(global_path).required(false));
        }
        if let Some(dir) = local_dir {
            builder = builder.add_source(File::from(local_config_path(dir)).required(false));
        }
        builder = builder.add_source(Environment::with_prefix("PHDTREE").separator("__"));

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;

        // Expand ~ and $VAR in path-like fields
        settings.expand_paths();

        Ok(settings)
    }

    fn expand_paths(&mut self) {
        self.csv_file = expand_path(&self.csv_file);
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# phdtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/phdtree/phdtree.toml
#   Local:  ./.phdtree.toml
#   Env:    PHDTREE_* environment variables (e.g. PHDTREE_CSV_FILE)

# Genealogy file loaded when none is given on the command line
# csv_file = "professors.csv"

# Prompt of the interactive shell
# prompt = "Please enter a command: "
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
