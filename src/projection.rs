use std::cmp::Ordering;
use std::path::PathBuf;

use crate::descriptor::{AppDescriptor, Registry, RegistryEntry};
use crate::error::RegistryResult;
use crate::util::json::{read_json, write_json};

/// Writes `appConfig.json`: the non-module registry entries in display order.
#[derive(Debug, Clone)]
pub struct ConfigProjector {
    registry_path: PathBuf,
    config_path: PathBuf,
    skip: bool,
}

impl ConfigProjector {
    pub fn new(
        registry_path: impl Into<PathBuf>,
        config_path: impl Into<PathBuf>,
        skip: bool,
    ) -> Self {
        Self {
            registry_path: registry_path.into(),
            config_path: config_path.into(),
            skip,
        }
    }

    /// Rebuilds the projection from the registry file. Does nothing when
    /// skipping is enabled.
    pub fn regenerate(&self) -> RegistryResult<()> {
        if self.skip {
            tracing::debug!(
                path = %self.config_path.display(),
                "skipping app config regeneration"
            );
            return Ok(());
        }
        let registry: Registry = read_json(&self.registry_path)?;
        let apps = project(&registry);
        tracing::debug!(
            count = apps.len(),
            path = %self.config_path.display(),
            "writing app config"
        );
        write_json(&self.config_path, &apps)
    }
}

/// Entries are written as stored, so the projection carries every field the
/// registry holds.
pub fn project(registry: &Registry) -> Vec<&RegistryEntry> {
    let mut apps = registry
        .values()
        .filter(|entry| !entry.descriptor().module)
        .collect::<Vec<_>>();
    apps.sort_by(|a, b| compare_apps(a.descriptor(), b.descriptor()));
    apps
}

/// Higher priority first, then title ascending.
pub fn compare_apps(a: &AppDescriptor, b: &AppDescriptor) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| a.title.cmp(&b.title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::RouteConfig;
    use std::fs;
    use tempfile::TempDir;

    fn app(key: &str, title: &str, priority: i64, module: bool) -> AppDescriptor {
        AppDescriptor {
            name: key.into(),
            title: title.into(),
            package: key.into(),
            priority,
            filename: format!("{key}.js"),
            description: None,
            version: None,
            icon: None,
            module,
            build: None,
            routes: RouteConfig::default(),
        }
    }

    fn registry(apps: Vec<AppDescriptor>) -> Registry {
        apps.into_iter()
            .map(|app| (app.name.clone(), RegistryEntry::new(app).unwrap()))
            .collect()
    }

    #[test]
    fn orders_by_priority_then_title() {
        let registry = registry(vec![
            app("c", "Charlie", 1, false),
            app("a", "Alpha", 1, false),
            app("z", "Zulu", 9, false),
            app("n", "Negative", -2, false),
        ]);
        let titles = project(&registry)
            .into_iter()
            .map(|entry| entry.descriptor().title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["Zulu", "Alpha", "Charlie", "Negative"]);
    }

    #[test]
    fn modules_are_excluded() {
        let registry = registry(vec![
            app("shell", "Shell", 100, true),
            app("home", "Home", 0, false),
        ]);
        let projected = project(&registry);
        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].descriptor().name, "home");
    }

    #[test]
    fn regenerate_writes_sorted_array() {
        let temp = TempDir::new().unwrap();
        let db = temp.path().join("appsDB.json");
        let config = temp.path().join("appConfig.json");
        write_json(
            &db,
            &registry(vec![app("b", "B", 0, false), app("a", "A", 3, false)]),
        )
        .unwrap();

        ConfigProjector::new(&db, &config, false).regenerate().unwrap();

        let written: Vec<AppDescriptor> =
            serde_json::from_str(&fs::read_to_string(&config).unwrap()).unwrap();
        assert_eq!(
            written.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn skip_leaves_config_untouched() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("appConfig.json");
        // The registry does not exist; a skipped run must not try to read it.
        ConfigProjector::new(temp.path().join("appsDB.json"), &config, true)
            .regenerate()
            .unwrap();
        assert!(!config.exists());
    }
}
