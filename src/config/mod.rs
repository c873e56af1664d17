//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Storage backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StorageBackend {
    /// Process-local store, the default for development.
    #[default]
    InMemory,

    /// PostgreSQL via sqlx (requires the `postgres` feature).
    Postgres,
}

/// A seeded login for the credentials provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUser {
    pub email: String,
    pub password: String,
}

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Which invoice store to use.
    #[serde(default)]
    pub storage: StorageBackend,

    /// Connection string for the postgres backend.
    #[serde(default)]
    pub database_url: Option<String>,

    /// Logins accepted by the seeded credentials provider.
    #[serde(default)]
    pub users: Vec<SeedUser>,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            storage: StorageBackend::InMemory,
            database_url: None,
            users: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Create a default configuration with one seeded login, for
    /// development runs without a config file
    pub fn default_config() -> Self {
        Self {
            users: vec![SeedUser {
                email: "user@example.com".to_string(),
                password: "123456".to_string(),
            }],
            ..Self::default()
        }
    }
}
