//! Initialize board use case

use crate::error::Result;
use crate::infrastructure::{Config, JsonStore};
use std::fs;
use std::path::Path;

/// Service for creating a new board
pub struct InitService;

impl InitService {
    /// Initialize a new job board at the specified path.
    pub fn execute(path: &Path, board_name: &str) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let store = JsonStore::new(path.to_path_buf());
        store.initialize()?;

        let config = Config::new(board_name);
        config.save_to_dir(path)?;

        println!("Initialized job board at {}", path.display());
        println!("Board: {}", board_name);

        Ok(())
    }
}
