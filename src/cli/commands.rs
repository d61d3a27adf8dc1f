//! CLI command implementations

use std::path::{Path, PathBuf};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;

use super::args::{Command, DEFAULT_CONFIG_PATH};
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::CheckConfig { config } => check_config(config.as_deref()),
    }
}

/// Resolve the effective configuration
///
/// An explicit path must exist. Without one, `./rosterdb.json` is used if
/// present, otherwise built-in defaults apply.
pub fn load_config(path: Option<&Path>) -> CliResult<HttpServerConfig> {
    let config = match path {
        Some(path) => HttpServerConfig::load(path)?,
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                HttpServerConfig::load(&default_path)?
            } else {
                HttpServerConfig::default()
            }
        }
    };
    Ok(config)
}

/// Boot the store and serve HTTP until interrupted
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
        config.validate()?;
    }

    let server = HttpServer::from_config(config)?;

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::io_error(format!("Failed to start runtime: {}", e)))?;
    runtime.block_on(server.start()).map_err(|e| {
        Logger::error("HTTP_SERVER_FAILED", &[("error", &e.to_string())]);
        CliError::io_error(format!("Server error: {}", e))
    })
}

/// Validate configuration and print it as JSON
pub fn check_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let rendered = serde_json::to_string_pretty(&config)
        .map_err(|e| CliError::config_error(format!("Failed to render config: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}
