//! CLI argument definitions using clap
//!
//! Commands:
//! - filmstore init --config <path>
//! - filmstore serve --config <path> [--port <port>]
//! - filmstore list --config <path> [--minimum-duration <minutes>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// filmstore - a films HTTP API backed by a JSON file
#[derive(Parser, Debug)]
#[command(name = "filmstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the default film collection to the data file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./filmstore.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./filmstore.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the film collection as JSON and exit
    List {
        /// Path to configuration file
        #[arg(long, default_value = "./filmstore.json")]
        config: PathBuf,

        /// Only films at least this many minutes long
        #[arg(long)]
        minimum_duration: Option<f64>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
