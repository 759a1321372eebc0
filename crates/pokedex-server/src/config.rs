//! RON configuration parsing for the HTTP server

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen addresses (e.g., "0.0.0.0:8080")
    #[serde(default = "default_listen")]
    pub listen: Vec<String>,
    /// Dataset document (`.json` or `.ron`)
    #[serde(default = "default_data_path")]
    pub data_path: String,
    /// When the dataset is loaded
    #[serde(default)]
    pub load_policy: LoadPolicy,
    /// Accept `POST /reload`
    #[serde(default)]
    pub enable_reload: bool,
}

fn default_listen() -> Vec<String> {
    vec!["127.0.0.1:8080".to_string()]
}

fn default_data_path() -> String {
    "data/data.json".to_string()
}

/// Dataset load policy
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Load once at startup and share the store across requests (default)
    #[default]
    Startup,
    /// Load the dataset anew for every request
    PerRequest,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            data_path: default_data_path(),
            load_policy: LoadPolicy::default(),
            enable_reload: false,
        }
    }
}

impl Config {
    /// Load configuration from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_ron_str(&content)
    }

    /// Parse and validate configuration from a RON string
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            ron::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.listen_addrs()?;
        if config.data_path.is_empty() {
            return Err(ConfigError::Validation("data_path is empty".to_string()));
        }
        Ok(config)
    }

    /// Parsed listen addresses
    pub fn listen_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        if self.listen.is_empty() {
            return Err(ConfigError::Validation(
                "at least one listen address is required".to_string(),
            ));
        }
        self.listen
            .iter()
            .map(|addr| {
                addr.parse().map_err(|_| {
                    ConfigError::Validation(format!("invalid listen address: {}", addr))
                })
            })
            .collect()
    }
}

/// Configuration error
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
