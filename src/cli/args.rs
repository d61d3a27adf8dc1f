//! CLI argument definitions using clap
//!
//! Commands:
//! - rosterdb serve [--config <path>] [--port <port>]
//! - rosterdb check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "./rosterdb.json";

/// rosterdb - REST service for student records
#[derive(Parser, Debug)]
#[command(name = "rosterdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults apply if ./rosterdb.json is absent)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate a configuration file and print the effective settings
    CheckConfig {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
