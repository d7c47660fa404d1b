use std::process::ExitCode;

use anyhow::Result;
use app_registry::cli::Cli;
use app_registry::config::Settings;
use app_registry::error::RegistryError;
use app_registry::manage;
use app_registry::validate::ValidationError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => {
            println!("DONE");
            ExitCode::SUCCESS
        }
        Err(err) => {
            match error_code(&err) {
                Some(code) => eprintln!("Error [{code}]: {err:#}"),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_cli(cli)?;
    tracing::info!(
        function = %settings.function,
        app = ?settings.app,
        skip_app_config = settings.skip_app_config,
        paths = ?settings.paths,
        "params passed"
    );
    manage::run(&settings)?;
    Ok(())
}

fn error_code(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(err) = err.downcast_ref::<RegistryError>() {
        return Some(err.code());
    }
    err.downcast_ref::<ValidationError>().map(ValidationError::code)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
