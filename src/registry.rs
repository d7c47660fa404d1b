use std::path::PathBuf;

use crate::config::AppParams;
use crate::descriptor::{AppDescriptor, Registry, RegistryEntry};
use crate::error::{RegistryError, RegistryResult};
use crate::projection::ConfigProjector;
use crate::util::json::{read_json, write_json};
use crate::validate::{AppKey, require_add_parameters};

/// `appsDB.json`: every known application keyed by its registry key.
///
/// Every mutation rewrites the file and regenerates the app config
/// projection. There is no locking; concurrent runs against the same file can
/// lose updates.
#[derive(Debug, Clone)]
pub struct RegistryStore {
    path: PathBuf,
    projector: ConfigProjector,
}

impl RegistryStore {
    pub fn new(path: impl Into<PathBuf>, projector: ConfigProjector) -> Self {
        Self {
            path: path.into(),
            projector,
        }
    }

    pub fn load(&self) -> RegistryResult<Registry> {
        read_json(&self.path)
    }

    pub fn save(&self, registry: &Registry) -> RegistryResult<()> {
        write_json(&self.path, registry)
    }

    /// Creates an empty registry when none exists, then regenerates the
    /// projection.
    pub fn initialize(&self) -> RegistryResult<()> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "creating empty app registry");
            self.save(&Registry::new())?;
        }
        self.projector.regenerate()
    }

    /// Deletes `key`. Removing an unknown key is not an error.
    pub fn remove(&self, key: &AppKey) -> RegistryResult<()> {
        let mut registry = self.load()?;
        if registry.shift_remove(key.as_str()).is_none() {
            tracing::debug!(key = %key, "app not present in registry");
        }
        self.save(&registry)?;
        self.projector.regenerate()
    }

    /// Validates `params`, then inserts the resulting descriptor, replacing
    /// any entry stored under the same key.
    pub fn add(&self, params: &AppParams) -> RegistryResult<AppDescriptor> {
        let validated = require_add_parameters(params)?;
        let descriptor = AppDescriptor::from_params(&validated, params);
        tracing::info!(app = ?descriptor, "adding app");

        let entry = RegistryEntry::new(descriptor.clone())
            .map_err(|err| RegistryError::json(&self.path, err))?;
        let mut registry = self.load()?;
        registry.insert(validated.key.into_string(), entry);
        self.save(&registry)?;
        self.projector.regenerate()?;
        Ok(descriptor)
    }
}
