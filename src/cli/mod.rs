//! CLI module for rosterdb
//!
//! - serve: boot the record store and HTTP server
//! - check-config: validate and print configuration

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, DEFAULT_CONFIG_PATH};
pub use commands::{check_config, load_config, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};

/// Parse process arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}
