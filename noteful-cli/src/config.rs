//! Layered configuration: CLI flag > environment > config file > defaults
//!
//! The config file lives at `~/.noteful/config.toml`:
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0:8000"
//! cors_permissive = false
//! request_timeout_secs = 30
//!
//! [database]
//! url = "postgres://localhost/noteful"
//! max_connections = 5
//! ```
//!
//! Environment variables reach the flags through clap (`DATABASE_URL`,
//! `NOTEFUL_BIND`), so they take part in the flag layer.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use noteful_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use noteful_server::ServerConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotefulConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub cors_permissive: bool,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
}

impl NotefulConfig {
    /// Get config file path: ~/.noteful/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".noteful/config.toml")
    }

    /// Load from an explicit path, or from the default path when it exists.
    ///
    /// A missing default file yields built-in defaults; a missing explicit
    /// file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::config_path();
                if !path.exists() {
                    tracing::debug!(path = %path.display(), "No config file, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid TOML")
    }

    pub fn bind_addr(&self, flag: Option<SocketAddr>) -> SocketAddr {
        flag.or(self.server.bind)
            .unwrap_or_else(|| ServerConfig::default().bind_addr)
    }

    pub fn database_url(&self, flag: Option<String>) -> Option<String> {
        flag.or_else(|| self.database.url.clone())
    }

    pub fn request_timeout(&self, flag: Option<u64>) -> Duration {
        flag.or(self.server.request_timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or_else(|| ServerConfig::default().request_timeout)
    }

    pub fn cors_permissive(&self, flag: bool) -> bool {
        flag || self.server.cors_permissive
    }

    pub fn max_connections(&self) -> u32 {
        self.database
            .max_connections
            .unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }
}
