use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::Cli;

pub const APPS_DB_FILE: &str = "appsDB.json";
pub const APPS_CONFIG_FILE: &str = "appConfig.json";
pub const IMPORT_MAP_FILE: &str = "import-map.json";

/// Parameters describing the application being added or removed.
#[derive(Debug, Clone, Default)]
pub struct AppParams {
    pub key: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub filename: Option<String>,
    pub artifact_name: Option<String>,
    pub routes: Option<String>,
    pub routes_match_mode: Option<String>,
    pub priority: Option<String>,
    pub commit: Option<String>,
    pub icon: Option<String>,
    pub is_module: bool,
}

impl AppParams {
    /// True when every parameter an `add` needs is present.
    pub fn is_adding_app(&self) -> bool {
        [&self.key, &self.title, &self.filename]
            .into_iter()
            .all(|value| value.as_deref().is_some_and(|v| !v.is_empty()))
    }
}

/// Locations of every file the tool reads or writes.
#[derive(Debug, Clone)]
pub struct Paths {
    pub apps_db: PathBuf,
    pub apps_config: PathBuf,
    pub import_map: PathBuf,
    pub static_routes: PathBuf,
}

impl Paths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            apps_db: dir.join(APPS_DB_FILE),
            apps_config: dir.join(APPS_CONFIG_FILE),
            import_map: dir.join(IMPORT_MAP_FILE),
            static_routes: default_static_routes(dir),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub function: String,
    pub app: AppParams,
    pub skip_app_config: bool,
    pub paths: Paths,
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to resolve current directory")?;
        Ok(Self::from_cli_in(cli, &cwd))
    }

    /// Builds settings resolving any unset directory against `cwd`.
    pub fn from_cli_in(cli: Cli, cwd: &Path) -> Self {
        let dir_or_cwd = |dir: Option<PathBuf>| dir.unwrap_or_else(|| cwd.to_path_buf());
        let paths = Paths {
            apps_db: dir_or_cwd(cli.apps_db_dir).join(APPS_DB_FILE),
            apps_config: dir_or_cwd(cli.apps_config_dir).join(APPS_CONFIG_FILE),
            import_map: dir_or_cwd(cli.import_map_dir).join(IMPORT_MAP_FILE),
            static_routes: cli
                .static_routes_file
                .unwrap_or_else(|| default_static_routes(cwd)),
        };

        Self {
            function: cli.function.unwrap_or_default(),
            app: AppParams {
                key: non_empty(cli.app_key),
                title: non_empty(cli.app_title),
                description: non_empty(cli.app_description),
                version: non_empty(cli.app_version),
                filename: non_empty(cli.app_filename),
                artifact_name: non_empty(cli.app_artifact_name),
                routes: non_empty(cli.app_routes),
                routes_match_mode: non_empty(cli.app_routes_match_mode),
                priority: non_empty(cli.app_priority),
                commit: non_empty(cli.app_commit),
                icon: non_empty(cli.app_icon),
                is_module: is_true(cli.is_module.as_deref()),
            },
            skip_app_config: is_true(cli.skip_app_config.as_deref()),
            paths,
        }
    }
}

fn default_static_routes(dir: &Path) -> PathBuf {
    dir.join("config").join("statics.json")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn is_true(value: Option<&str>) -> bool {
    value == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    // Only for flag-driven cases: options left unset still fall back to the
    // process environment.
    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["manage-apps"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn directories_default_to_cwd() {
        let cwd = Path::new("/work");
        let settings = Settings::from_cli_in(Cli::default(), cwd);
        assert_eq!(settings.paths.apps_db, cwd.join("appsDB.json"));
        assert_eq!(settings.paths.apps_config, cwd.join("appConfig.json"));
        assert_eq!(settings.paths.import_map, cwd.join("import-map.json"));
        assert_eq!(
            settings.paths.static_routes,
            cwd.join("config").join("statics.json")
        );
        assert_eq!(settings.function, "");
        assert!(!settings.skip_app_config);
    }

    #[test]
    fn explicit_directories_override_defaults() {
        let settings = Settings::from_cli_in(
            parse(&[
                "--apps-db-dir",
                "/db",
                "--apps-config-dir",
                "/cfg",
                "--import-map-dir",
                "/map",
                "--static-routes-file",
                "/static/routes.json",
            ]),
            Path::new("/work"),
        );
        assert_eq!(settings.paths.apps_db, Path::new("/db/appsDB.json"));
        assert_eq!(settings.paths.apps_config, Path::new("/cfg/appConfig.json"));
        assert_eq!(settings.paths.import_map, Path::new("/map/import-map.json"));
        assert_eq!(
            settings.paths.static_routes,
            Path::new("/static/routes.json")
        );
    }

    #[test]
    fn flags_are_true_only_for_literal_true() {
        let cli = Cli {
            is_module: Some("TRUE".into()),
            skip_app_config: Some("true".into()),
            ..Cli::default()
        };
        let settings = Settings::from_cli_in(cli, Path::new("/work"));
        assert!(!settings.app.is_module);
        assert!(settings.skip_app_config);
    }

    #[test]
    fn empty_values_count_as_absent() {
        let cli = Cli {
            app_key: Some(String::new()),
            app_title: Some("Foo".into()),
            app_filename: Some("foo.js".into()),
            ..Cli::default()
        };
        let settings = Settings::from_cli_in(cli, Path::new("/work"));
        assert_eq!(settings.app.key, None);
        assert!(!settings.app.is_adding_app());
    }
}
