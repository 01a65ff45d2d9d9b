use anyhow::{anyhow, Result};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub database: MongoDbConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct MongoDbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub connection_timeout_ms: u64,
    pub max_pool_size: Option<u32>,
}

/// Minimum document counts padded in at startup
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SeedConfig {
    pub enabled: bool,
    pub min_users: u64,
    pub min_files: u64,
}

impl Default for MongoDbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 27017,
            database: "files_manager".to_string(),
            connection_timeout_ms: 5000,
            max_pool_size: None,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_users: 4,
            min_files: 30,
        }
    }
}

impl MongoDbConfig {
    /// Connection string for the configured host and port
    pub fn uri(&self) -> String {
        format!("mongodb://{}:{}/", self.host, self.port)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(anyhow!("MongoDB host not configured"));
        }

        if self.port == 0 {
            return Err(anyhow!("MongoDB port must be non-zero"));
        }

        if self.database.is_empty() {
            return Err(anyhow!("MongoDB database name not configured"));
        }

        Ok(())
    }
}

impl Config {
    /// Load from a TOML file, falling back to defaults, then apply the environment.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        info!("Loading config from {}", path.display());
        let mut config = match Self::load_from_file(path) {
            Ok(config) => {
                info!("Config loaded from file");
                config
            }
            Err(e) => {
                error!("Failed to load config from file: {}", e);
                info!("Falling back to environment variables or defaults");
                Config::default()
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Override database settings from `DB_HOST`, `DB_PORT` and `DB_DATABASE`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("DB_HOST") {
            self.database.host = host;
        }

        if let Some(port) = lookup("DB_PORT") {
            match port.parse::<u16>() {
                Ok(port_num) => self.database.port = port_num,
                Err(e) => warn!("Ignoring invalid DB_PORT '{}': {}", port, e),
            }
        }

        if let Some(db_name) = lookup("DB_DATABASE") {
            self.database.database = db_name;
        }
    }
}
