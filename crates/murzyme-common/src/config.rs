//! Configuration loading for Murzyme.
//! Reads murzyme.toml from the current directory or the path in the MURZYME_CONFIG env var.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{MurzymeError, Result};

pub const CONFIG_ENV_VAR: &str = "MURZYME_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "murzyme.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MurzymeConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allow cross-origin calls from the static site
    #[serde(default = "bool_true")]
    pub permissive_cors: bool,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 3001 }
fn bool_true()    -> bool   { true }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            permissive_cors: true,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by RUST_LOG
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String { "info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_filter() }
    }
}

impl MurzymeConfig {
    /// Load configuration from murzyme.toml.
    /// Checks MURZYME_CONFIG env var first, then current directory.
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| MurzymeError::Config(format!("{}: {e}", path.display())))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MurzymeError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = MurzymeConfig::default();
        assert_eq!(config.server.bind_addr(), "127.0.0.1:3001");
        assert!(config.server.permissive_cors);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = MurzymeConfig::from_toml_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let err = MurzymeConfig::from_toml_str("[server]\nport = \"eighty\"\n").unwrap_err();
        assert!(matches!(err, MurzymeError::Config(_)));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = MurzymeConfig::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.server.port, 3001);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nhost = \"0.0.0.0\"\npermissive_cors = false\n[logging]\nfilter = \"debug\"").unwrap();
        let config = MurzymeConfig::load_from(file.path()).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(!config.server.permissive_cors);
        assert_eq!(config.logging.filter, "debug");
    }
}
