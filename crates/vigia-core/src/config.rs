//! Service configuration.
//!
//! Configuration is a TOML file deserialized with serde; every field has a
//! default so an absent file yields a runnable in-memory demo service.
//! The `PORT` environment variable overrides the configured port (the
//! hosting platform injects it).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which data source backs the observation store and election registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataBackend {
    /// Seeded in-memory dataset (demo mode).
    #[default]
    Memory,
    /// SQLite database via sqlx.
    Sqlite,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Data source settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSourceConfig {
    /// Backend selection.
    #[serde(default)]
    pub backend: DataBackend,
    /// Connection URL for the sqlite backend, e.g.
    /// `sqlite://./vigia.db?mode=ro`.
    #[serde(default)]
    pub database_url: Option<String>,
}

/// Report catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportsConfig {
    /// Root directory holding report artifacts. The scanner reads the
    /// fixed `moep` subdirectory of this root.
    #[serde(default = "default_reports_root")]
    pub root: String,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// tracing env-filter directive, e.g. `info` or `vigia=debug`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

/// Top-level service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Data source settings.
    #[serde(default)]
    pub data_source: DataSourceConfig,
    /// Report catalog settings.
    #[serde(default)]
    pub reports: ReportsConfig,
    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_reports_root() -> String {
    "./reports".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            root: default_reports_root(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            data_source: DataSourceConfig::default(),
            reports: ReportsConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from an optional TOML file, then applies
    /// environment overrides.
    ///
    /// A missing path argument yields the defaults; a path that does not
    /// exist is a configuration error (a typo'd `--config` should not
    /// silently start a demo service).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(Error::config(format!(
                        "config file not found: {}",
                        p.display()
                    )));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| {
                    Error::config(format!("failed to parse {}: {e}", p.display()))
                })?
            }
            None => Self::default(),
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Applies environment overrides (`PORT`).
    ///
    /// An unparseable `PORT` is a configuration error: a mistyped value
    /// should not silently start the service on the configured port.
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(port) = std::env::var("PORT") {
            self.override_port(&port)?;
        }
        Ok(())
    }

    fn override_port(&mut self, port: &str) -> Result<()> {
        self.server.port = port
            .parse::<u16>()
            .map_err(|_| Error::config(format!("invalid PORT value '{port}'")))?;
        Ok(())
    }

    /// Validates cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        if self.data_source.backend == DataBackend::Sqlite
            && self.data_source.database_url.is_none()
        {
            return Err(Error::config(
                "data_source.backend = \"sqlite\" requires data_source.database_url",
            ));
        }
        Ok(())
    }
}
