//! CLI module for filmstore
//!
//! Provides command-line interface for:
//! - init: Write the default collection to the data file
//! - serve: Run the HTTP API
//! - list: Print the collection as JSON

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{init, list, run, run_command, serve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;
