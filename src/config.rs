//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::constants::{DEFAULT_DATA_DIR, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub league: LeagueConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// JSON file storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

/// League scoring configuration
#[derive(Debug, Clone)]
pub struct LeagueConfig {
    /// Championship points per finishing position. `None` means the
    /// built-in default table is used.
    pub points_table: Option<HashMap<u32, f64>>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            storage: StorageConfig::from_env()?,
            league: LeagueConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl StorageConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            data_dir: PathBuf::from(
                env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string()),
            ),
        })
    }
}

impl LeagueConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let points_table = match env::var("LEAGUE_POINTS_TABLE") {
            Ok(raw) => Some(parse_points_table(&raw)?),
            Err(_) => None,
        };
        Ok(Self { points_table })
    }
}

/// Parse a points table from its JSON object form, e.g. `{"1": 25, "2": 18}`
fn parse_points_table(raw: &str) -> Result<HashMap<u32, f64>, ConfigError> {
    serde_json::from_str(raw).map_err(|_| ConfigError::InvalidValue("LEAGUE_POINTS_TABLE".to_string()))
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Test that defaults are applied when env vars are not set
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_parse_points_table() {
        let table = parse_points_table(r#"{"1": 10, "2": 6, "3": 4}"#).unwrap();
        assert_eq!(table.get(&1), Some(&10.0));
        assert_eq!(table.get(&2), Some(&6.0));
        assert_eq!(table.get(&3), Some(&4.0));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_parse_points_table_rejects_malformed_input() {
        assert!(parse_points_table("not json").is_err());
        assert!(parse_points_table(r#"{"first": 10}"#).is_err());
    }
}
