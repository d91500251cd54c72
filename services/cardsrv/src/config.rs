//! Service configuration
//!
//! Layered with figment: built-in defaults, then an optional yaml file,
//! then `CARDSRV_`-prefixed environment variables
//! (e.g. `CARDSRV_SERVER_PORT=8080`).

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config/cardsrv.yaml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Service port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter applied when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from `path` (or the default path when `None`).
    ///
    /// A missing file is not an error; defaults and environment overrides
    /// still apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let yaml_path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
        let config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(yaml_path))
            .merge(Env::prefixed("CARDSRV_").split("_"))
            .extract()?;
        Ok(config)
    }

    /// Address string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
