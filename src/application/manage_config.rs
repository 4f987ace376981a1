//! Config management use case

use crate::error::{JobdeckError, Result};
use crate::infrastructure::{Config, JsonStore};

/// Service for managing board configuration
pub struct ConfigService {
    store: JsonStore,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(store: JsonStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.store.root)?;

        match key {
            "name" => Ok(config.board_name.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(JobdeckError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: name, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.store.root)?;

        match key {
            "name" => {
                config.board_name = value.to_string();
            }
            "created" => {
                return Err(JobdeckError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(JobdeckError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: name",
                    key
                )));
            }
        }

        config.save_to_dir(&self.store.root)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.store.root)
    }
}
