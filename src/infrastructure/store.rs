//! Local JSON key-value store

use crate::error::{JobdeckError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const DATA_DIR: &str = ".jobdeck";

/// Key-value store over a `.jobdeck/` data directory.
///
/// Each key is one file `<key>.json`. Every write replaces the whole blob
/// for its key; there is no locking, so the last writer wins in full.
#[derive(Debug, Clone)]
pub struct JsonStore {
    pub root: PathBuf,
}

impl JsonStore {
    /// Create a store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        JsonStore { root }
    }

    /// Discover the board root: JOBDECK_ROOT environment variable first,
    /// then walking up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("JOBDECK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                return Ok(JsonStore::new(path));
            } else {
                return Err(JobdeckError::Config(format!(
                    "JOBDECK_ROOT is set to '{}' but no .jobdeck directory found. \
                    Run 'jobdeck init' in that directory or unset JOBDECK_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the board root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_data_dir(&current) {
                return Ok(JsonStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(JobdeckError::NotJobdeckDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_data_dir(path: &Path) -> bool {
        path.join(DATA_DIR).is_dir()
    }

    /// Check if the data directory exists
    pub fn is_initialized(&self) -> bool {
        Self::has_data_dir(&self.root)
    }

    /// Create the data directory
    pub fn initialize(&self) -> Result<()> {
        let data_dir = self.root.join(DATA_DIR);

        if data_dir.exists() {
            return Err(JobdeckError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&data_dir)?;
        Ok(())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(DATA_DIR).join(format!("{}.json", key))
    }

    /// Read the raw blob for a key. A missing key is `None`, not an error.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(JobdeckError::Io(e)),
        }
    }

    /// Write the raw blob for a key, replacing any previous value
    pub fn set_raw(&self, key: &str, contents: &str) -> Result<()> {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&path, contents).map_err(JobdeckError::Io)
    }

    /// Remove a key. Removing a missing key is not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(JobdeckError::Io(e)),
        }
    }

    /// Read and decode the value stored under a key.
    /// Missing key is `None`; unparseable content is a CorruptStorage error.
    pub fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.get_raw(key)? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| JobdeckError::CorruptStorage {
                key: key.to_string(),
                source,
            })
    }

    /// Encode and write a value under a key
    pub fn save_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(value).map_err(|source| JobdeckError::CorruptStorage {
                key: key.to_string(),
                source,
            })?;
        self.set_raw(key, &contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_new_store() {
        let path = PathBuf::from("/tmp/test");
        let store = JsonStore::new(path.clone());
        assert_eq!(store.root, path);
    }

    #[test]
    fn test_initialize_creates_data_dir() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path().to_path_buf());

        assert!(!store.is_initialized());
        store.initialize().unwrap();
        assert!(store.is_initialized());
        assert!(temp.path().join(".jobdeck").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path().to_path_buf());

        store.initialize().unwrap();
        assert!(store.initialize().is_err());
    }

    #[test]
    fn test_get_raw_missing_key() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        assert_eq!(store.get_raw("jobs").unwrap(), None);
    }

    #[test]
    fn test_set_and_get_raw() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        store.set_raw("jobs", "[]").unwrap();
        assert_eq!(store.get_raw("jobs").unwrap().as_deref(), Some("[]"));
        assert!(temp.path().join(".jobdeck/jobs.json").exists());
    }

    #[test]
    fn test_set_raw_overwrites_whole_blob() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        store.set_raw("jobs", "[1]").unwrap();
        store.set_raw("jobs", "[2]").unwrap();
        assert_eq!(store.get_raw("jobs").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        store.remove("session").unwrap();
    }

    #[test]
    fn test_remove_deletes_key() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        store.set_raw("session", "{}").unwrap();
        store.remove("session").unwrap();
        assert_eq!(store.get_raw("session").unwrap(), None);
    }

    #[test]
    fn test_load_json_missing_key() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        let loaded: Option<Vec<String>> = store.load_json("jobs").unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_load_json_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        let values = vec!["a".to_string(), "b".to_string()];
        store.save_json("jobs", &values).unwrap();

        let loaded: Option<Vec<String>> = store.load_json("jobs").unwrap();
        assert_eq!(loaded, Some(values));
    }

    #[test]
    fn test_load_json_corrupt_content() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        store.set_raw("jobs", "not json at all").unwrap();
        let result: Result<Option<Vec<String>>> = store.load_json("jobs");

        match result.unwrap_err() {
            JobdeckError::CorruptStorage { key, .. } => assert_eq!(key, "jobs"),
            other => panic!("Expected CorruptStorage, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".jobdeck")).unwrap();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let store = JsonStore::discover_from(&subdir).unwrap();
        assert_eq!(store.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_data_dir() {
        let temp = TempDir::new().unwrap();

        let result = JsonStore::discover_from(temp.path());
        match result.unwrap_err() {
            JobdeckError::NotJobdeckDirectory(_) => {}
            other => panic!("Expected NotJobdeckDirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_with_jobdeck_root_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("JOBDECK_ROOT");

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".jobdeck")).unwrap();

        std::env::set_var("JOBDECK_ROOT", temp.path());

        let store = JsonStore::discover().unwrap();
        assert_eq!(store.root, temp.path());
    }

    #[test]
    fn test_discover_jobdeck_root_not_initialized() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("JOBDECK_ROOT");

        let temp = TempDir::new().unwrap();
        std::env::set_var("JOBDECK_ROOT", temp.path());

        let result = JsonStore::discover();
        match result.unwrap_err() {
            JobdeckError::Config(msg) => {
                assert!(msg.contains("no .jobdeck directory"));
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
