//! CLI command implementations
//!
//! Each command loads the configuration file first; nothing touches the
//! data file before the configuration is valid.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::films::FilmStore;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event_with_fields, Event, Logger, Severity};

use super::args::Command;
use super::errors::{CliError, CliErrorCode, CliResult};
use super::io::write_response;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// JSON file holding the film collection (default "./data/films.json")
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Minimum log severity (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// HTTP server settings: `host`, `port`, `cors_origins`
    #[serde(flatten)]
    pub server: HttpServerConfig,
}

fn default_data_file() -> String {
    "./data/films.json".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_level: default_log_level(),
            server: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_file.trim().is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }

        self.server.validate().map_err(|e| CliError::config_error(e))?;

        self.severity()?;

        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse::<Severity>()
            .map_err(|e| CliError::config_error(e))
    }

    /// Get the data file as Path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_file)
    }

    /// Film store over the configured data file
    pub fn store(&self) -> FilmStore {
        FilmStore::new(self.data_path())
    }
}

/// Load and validate the config, then apply its log level.
fn load_config(config_path: &Path) -> CliResult<Config> {
    let config = Config::load(config_path)?;
    Logger::set_min_severity(config.severity()?);

    let path = config_path.display().to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("config", path.as_str()), ("data_file", config.data_file.as_str())],
    );
    Ok(config)
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(&config, port),
        Command::List {
            config,
            minimum_duration,
        } => list(&config, minimum_duration),
    }
}

/// Write the default collection to the data file.
///
/// Fails if the data file already exists; existing data is never
/// overwritten.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let store = config.store();

    if !store.initialize()? {
        return Err(CliError::already_initialized(store.path().display()));
    }

    write_response(json!({
        "initialized": true,
        "data_file": config.data_file,
        "films": store.read_all(None).len(),
    }))
}

/// Start the HTTP server and block until Ctrl-C
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        if port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }
        config.server.port = port;
    }

    let server = HttpServer::with_config(config.server.clone(), config.store());

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Print the collection, optionally filtered by minimum duration
pub fn list(config_path: &Path, minimum_duration: Option<f64>) -> CliResult<()> {
    if let Some(minimum) = minimum_duration {
        if !minimum.is_finite() || minimum <= 0.0 {
            return Err(CliError::new(
                CliErrorCode::InvalidArgument,
                format!("minimum-duration must be a positive number, got {}", minimum),
            ));
        }
    }

    let config = load_config(config_path)?;
    let films = config.store().read_all(minimum_duration);
    write_response(serde_json::to_value(films)?)
}
