//! Board configuration

use crate::error::{JobdeckError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub board_name: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with the given board name
    pub fn new(board_name: &str) -> Self {
        Config {
            board_name: board_name.to_string(),
            created: Utc::now(),
        }
    }

    /// Load config from .jobdeck/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".jobdeck").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JobdeckError::NotJobdeckDirectory(path.to_path_buf())
            } else {
                JobdeckError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| JobdeckError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .jobdeck/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let data_dir = path.join(".jobdeck");
        let config_path = data_dir.join("config.toml");

        if !data_dir.exists() {
            fs::create_dir(&data_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| JobdeckError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
