use anyhow::{Context, Result};

use crate::config::Settings;
use crate::import_map::{ImportMap, ImportMapBuilder};
use crate::projection::ConfigProjector;
use crate::registry::RegistryStore;
use crate::validate::require_valid_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Add,
    Remove,
    Regenerate,
}

impl Function {
    /// Case-insensitive; unknown values mean no mutation.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "add" => Function::Add,
            "remove" => Function::Remove,
            _ => Function::Regenerate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Added,
    Removed,
    Unchanged,
}

#[derive(Debug)]
pub struct RunReport {
    pub mutation: Mutation,
    pub import_map: ImportMap,
}

pub fn run(settings: &Settings) -> Result<RunReport> {
    let paths = &settings.paths;
    let projector = ConfigProjector::new(
        &paths.apps_db,
        &paths.apps_config,
        settings.skip_app_config,
    );
    let store = RegistryStore::new(&paths.apps_db, projector);

    store
        .initialize()
        .context("failed to initialize the app registry")?;

    let key_param = settings.app.key.as_deref().unwrap_or_default();
    let mutation = match Function::parse(&settings.function) {
        Function::Add if settings.app.is_adding_app() => {
            store.add(&settings.app).context("failed to add app")?;
            tracing::info!(key = key_param, "app added");
            Mutation::Added
        }
        Function::Remove => {
            tracing::info!(key = key_param, "removing app");
            let key = require_valid_key("APP_KEY", settings.app.key.as_deref())?;
            store.remove(&key).context("failed to remove app")?;
            tracing::info!(key = %key, "app removed");
            Mutation::Removed
        }
        Function::Add => {
            tracing::debug!("add requested without APP_KEY, APP_TITLE or APP_FILENAME");
            Mutation::Unchanged
        }
        Function::Regenerate => Mutation::Unchanged,
    };

    let builder = ImportMapBuilder::new(&paths.apps_db, &paths.static_routes, &paths.import_map);
    let import_map = builder
        .construct()
        .context("failed to write the import map")?;

    Ok(RunReport {
        mutation,
        import_map,
    })
}
