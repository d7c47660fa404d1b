use std::path::PathBuf;

use clap::Parser;

/// Every option doubles as an environment variable so CI pipelines can drive
/// the tool without building an argument list.
#[derive(Parser, Debug, Default)]
#[command(name = "manage-apps")]
#[command(version)]
#[command(about = "Maintain the app registry, app config list and import map")]
pub struct Cli {
    /// Operation to perform: `add`, `remove`, anything else only regenerates
    #[arg(long, env = "FUNCTION")]
    pub function: Option<String>,
    /// Registry key of the application (e.g. `my-app` or `@scope/app`)
    #[arg(long, env = "APP_KEY")]
    pub app_key: Option<String>,
    /// Human readable title
    #[arg(long, env = "APP_TITLE")]
    pub app_title: Option<String>,
    #[arg(long, env = "APP_DESCRIPTION")]
    pub app_description: Option<String>,
    #[arg(long, env = "APP_VERSION")]
    pub app_version: Option<String>,
    /// Entry file served under `/app/<key>/`
    #[arg(long, env = "APP_FILENAME")]
    pub app_filename: Option<String>,
    /// Overrides APP_FILENAME as the served file name when set
    #[arg(long, env = "APP_ARTIFACT_NAME")]
    pub app_artifact_name: Option<String>,
    /// Comma-separated list of routes the app answers to
    #[arg(long, env = "APP_ROUTES")]
    pub app_routes: Option<String>,
    #[arg(long, env = "APP_ROUTES_MATCH_MODE")]
    pub app_routes_match_mode: Option<String>,
    /// Sort priority; higher comes first, unparsable values count as 0
    #[arg(long, env = "APP_PRIORITY", allow_hyphen_values = true)]
    pub app_priority: Option<String>,
    /// Build identifier recorded as `build`
    #[arg(long, env = "APP_COMMIT")]
    pub app_commit: Option<String>,
    #[arg(long, env = "APP_ICON")]
    pub app_icon: Option<String>,
    /// `true` marks the entry as a module (kept out of appConfig.json)
    #[arg(long, env = "IS_MODULE")]
    pub is_module: Option<String>,
    /// `true` skips regenerating appConfig.json
    #[arg(long, env = "SKIP_APP_CONFIG")]
    pub skip_app_config: Option<String>,
    /// Directory holding appsDB.json (defaults to the working directory)
    #[arg(long, env = "APPS_DB_DIR")]
    pub apps_db_dir: Option<PathBuf>,
    /// Directory receiving appConfig.json (defaults to the working directory)
    #[arg(long, env = "APPS_CONFIG_DIR")]
    pub apps_config_dir: Option<PathBuf>,
    /// Static import map entries (defaults to ./config/statics.json)
    #[arg(long, env = "STATIC_ROUTES_FILE")]
    pub static_routes_file: Option<PathBuf>,
    /// Directory receiving import-map.json (defaults to the working directory)
    #[arg(long, env = "IMPORT_MAP_DIR")]
    pub import_map_dir: Option<PathBuf>,
}
