//! Config file layer: ~/.newsdesk/config.toml
//!
//! Precedence is flag > environment > config file > built-in default. The
//! first two are handled by clap; this file only supplies the fallback.
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:3030"
//! database_url = "postgres://localhost/newsdesk"
//! max_connections = 5
//! acquire_timeout_secs = 5
//! statement_timeout_secs = 10
//!
//! [client]
//! endpoint = "http://127.0.0.1:3030"
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3030";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewsdeskConfig {
    pub server: ServerSection,
    pub client: ClientSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub database_url: Option<String>,
    pub cors_permissive: Option<bool>,
    pub max_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub statement_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientSection {
    pub endpoint: Option<String>,
}

impl NewsdeskConfig {
    /// Load the config file; a missing file means all defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config file at {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content).context("Failed to parse config file (invalid TOML)")
    }

    /// Get config file path: ~/.newsdesk/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".newsdesk/config.toml")
    }

    /// Article server base URL for client commands
    pub fn endpoint(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.client.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }
}
