//! Application settings: command-line arguments merged over an optional
//! TOML configuration file, with built-in defaults underneath.
//!
//! The file lives at `<config_dir>/rolodex/config.toml`. A missing file is
//! fine; a malformed one is a startup error.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Directory listing endpoint used when neither the CLI nor the
/// configuration file names one.
pub const DEFAULT_ENDPOINT: &str = "https://602e7c2c4410730017c50b9d.mockapi.io/users";

const DEFAULT_TICK_MS: u64 = 250;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Version string including build metadata
pub fn version() -> String {
    format!(
        "rolodex {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_BUILD_TIMESTAMP")
    )
}

/// Errors that can occur while loading application settings
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file exists but could not be read
    #[error("could not read {}: {source}", path.display())]
    Read {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for our schema
    #[error("could not parse {}: {source}", path.display())]
    Parse {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// The resolved endpoint is not a usable URL
    #[error("invalid endpoint URL {url:?}: {reason}")]
    InvalidEndpoint {
        /// The rejected URL text
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "rolodex", version = version(), about = "A terminal user directory browser")]
pub struct Args {
    /// Path to the configuration file
    #[arg(short = 'C', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory listing endpoint URL
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Log filter, e.g. "info" or "rolodex=debug"
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

/// `[log]` section of the configuration file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    /// Directory for the log file
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Log filter
    #[serde(default)]
    pub level: Option<String>,
}

/// On-disk configuration file schema
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    /// Directory listing endpoint URL
    #[serde(default)]
    pub endpoint: Option<String>,

    /// UI event poll interval in milliseconds
    #[serde(default)]
    pub tick_ms: Option<u64>,

    /// Logging options
    #[serde(default)]
    pub log: LogConfig,
}

impl FileConfig {
    /// Parse the file at `path`, or return defaults if it does not exist
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(FileConfig::default());
            },
            Err(e) => {
                return Err(ConfigError::Read { path: path.to_path_buf(), source: e });
            },
        };

        toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rolodex")
        .join("config.toml")
}

fn default_log_dir() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rolodex")
}

/// Fully resolved settings the application runs with
#[derive(Debug, Clone)]
pub struct ApplicationSettings {
    /// Directory listing endpoint
    pub endpoint: Url,
    /// UI event poll interval
    pub tick: Duration,
    /// Directory the log file is written under
    pub log_dir: PathBuf,
    /// Log filter
    pub log_level: String,
}

impl ApplicationSettings {
    /// Resolve settings from CLI arguments, the configuration file, and
    /// defaults, in that order of precedence.
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let path = args.config.unwrap_or_else(default_config_path);
        let file = FileConfig::load(&path)?;

        let endpoint = args
            .endpoint
            .or(file.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = Url::parse(&endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            url: endpoint.clone(),
            reason: e.to_string(),
        })?;

        let tick = Duration::from_millis(file.tick_ms.unwrap_or(DEFAULT_TICK_MS).max(10));
        let log_dir = file.log.dir.unwrap_or_else(default_log_dir);
        let log_level = args
            .log_level
            .or(file.log.level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(ApplicationSettings { endpoint, tick, log_dir, log_level })
    }
}
