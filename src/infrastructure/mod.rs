//! Infrastructure layer - Persistence and configuration

pub mod config;
pub mod repository;
pub mod store;

pub use config::Config;
pub use repository::{ApplicationRepository, JobRepository, UserRepository};
pub use store::JsonStore;
