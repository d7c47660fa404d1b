use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::descriptor::{AppDescriptor, Registry, RegistryEntry};
use crate::error::RegistryResult;
use crate::util::json::{read_json, write_json};

pub const APPS_BASE_PATH: &str = "/app";

pub type Imports = IndexMap<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportMap {
    pub imports: Imports,
}

/// Builds `import-map.json` from the static routes file plus one entry per
/// registered application.
#[derive(Debug, Clone)]
pub struct ImportMapBuilder {
    registry_path: PathBuf,
    static_routes_path: PathBuf,
    import_map_path: PathBuf,
}

impl ImportMapBuilder {
    pub fn new(
        registry_path: impl Into<PathBuf>,
        static_routes_path: impl Into<PathBuf>,
        import_map_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry_path: registry_path.into(),
            static_routes_path: static_routes_path.into(),
            import_map_path: import_map_path.into(),
        }
    }

    /// Static entries, or an empty map when the file is missing or is not a
    /// JSON object.
    pub fn load_static_routes(&self) -> Imports {
        match read_json::<Imports>(&self.static_routes_path) {
            Ok(statics) => statics,
            Err(err) => {
                tracing::warn!(error = %err, "returning empty static routes");
                Imports::new()
            }
        }
    }

    pub fn construct(&self) -> RegistryResult<ImportMap> {
        let statics = self.load_static_routes();
        let registry: Registry = read_json(&self.registry_path)?;
        let map = merge(statics, &registry);
        write_json(&self.import_map_path, &map)?;
        Ok(map)
    }
}

pub fn build_app_route(app: &AppDescriptor) -> (String, String) {
    (
        app.package.clone(),
        format!("{APPS_BASE_PATH}/{}/{}", app.name, app.filename),
    )
}

/// App routes are applied after the statics, so an app replaces a static
/// entry with the same specifier while keeping its position.
pub fn merge(statics: Imports, registry: &Registry) -> ImportMap {
    let mut imports = statics;
    let routes = registry
        .values()
        .map(RegistryEntry::descriptor)
        .map(build_app_route);
    for (package, route) in routes {
        imports.insert(package, Value::String(route));
    }
    ImportMap { imports }
}
