//! Error types for jobdeck

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the jobdeck application
#[derive(Debug, Error)]
pub enum JobdeckError {
    #[error("Not a jobdeck directory: {0}")]
    NotJobdeckDirectory(PathBuf),

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Invalid email or password")]
    AuthenticationFailed,

    #[error("Job not found: {0}")]
    JobNotFound(String),

    #[error("Application not found: {0}")]
    ApplicationNotFound(String),

    #[error("An account already exists for {0}")]
    DuplicateEmail(String),

    #[error("Already applied to this job: {0}")]
    AlreadyApplied(String),

    #[error("{0}")]
    AccessDenied(String),

    #[error("Invalid application status: {0}")]
    InvalidStatus(String),

    #[error("Corrupt storage for key '{key}': {source}")]
    CorruptStorage {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl JobdeckError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JobdeckError::NotJobdeckDirectory(_) => 2,
            JobdeckError::NotLoggedIn | JobdeckError::AuthenticationFailed => 3,
            JobdeckError::JobNotFound(_) | JobdeckError::ApplicationNotFound(_) => 4,
            JobdeckError::CorruptStorage { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JobdeckError::NotJobdeckDirectory(path) => {
                format!(
                    "Not a jobdeck directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'jobdeck init' in this directory to create a board\n\
                    • Navigate to an existing jobdeck directory\n\
                    • Set JOBDECK_ROOT environment variable to your board path",
                    path.display()
                )
            }
            JobdeckError::NotLoggedIn => {
                "Not logged in\n\n\
                Suggestions:\n\
                • Log in first: jobdeck login --email you@example.com --password <pw>\n\
                • Create an account: jobdeck register --email you@example.com \
                --password <pw> --name 'Your Name'"
                    .to_string()
            }
            JobdeckError::AuthenticationFailed => {
                "Invalid email or password\n\n\
                Suggestions:\n\
                • Check the email address and password for typos\n\
                • Create an account with 'jobdeck register' if you don't have one"
                    .to_string()
            }
            JobdeckError::JobNotFound(id) => {
                format!(
                    "Job not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'jobdeck jobs' to list available jobs and their ids",
                    id
                )
            }
            JobdeckError::InvalidStatus(status) => {
                format!(
                    "Invalid application status: '{}'\n\n\
                    Valid statuses: pending, reviewed, accepted, rejected\n\
                    Example: jobdeck review 1700000000000 accepted",
                    status
                )
            }
            JobdeckError::CorruptStorage { key, source } => {
                format!(
                    "Corrupt storage for key '{}': {}\n\n\
                    Suggestions:\n\
                    • Inspect .jobdeck/{}.json and repair or remove it\n\
                    • A removed file is treated as an empty collection",
                    key, source, key
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JobdeckError
pub type Result<T> = std::result::Result<T, JobdeckError>;
