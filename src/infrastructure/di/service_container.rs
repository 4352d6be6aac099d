//! Service container for dependency injection
//!
//! Wires up the loader and query service with their dependencies.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::services::GenealogyService;
use crate::application::{ApplicationResult, GenealogyLoader, LoadReport};
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};
use crate::infrastructure::{InfraError, InfraResult};

/// Container holding settings and I/O implementations shared by all services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, fs }
    }

    pub fn loader(&self) -> GenealogyLoader {
        GenealogyLoader::new(Arc::clone(&self.fs))
    }

    /// Load the genealogy at `csv` (configured file if `None`) into a query service.
    pub fn genealogy_service(
        &self,
        csv: Option<&Path>,
    ) -> ApplicationResult<(GenealogyService, LoadReport)> {
        let path = csv.unwrap_or(&self.settings.csv_file);
        debug!("loading genealogy from {}", path.display());
        let loaded = self.loader().load_file(path)?;
        Ok((GenealogyService::new(loaded.tree), loaded.report))
    }

    /// Read a command script through the filesystem abstraction.
    pub fn read_script(&self, path: &Path) -> InfraResult<String> {
        self.fs
            .read_to_string(path)
            .map_err(|e| InfraError::io(format!("read script {}", path.display()), e))
    }
}
