//! Domain layer - Entities and query logic

pub mod application;
pub mod ids;
pub mod job;
pub mod query;
pub mod user;

pub use application::{Application, ApplicationStatus};
pub use ids::next_id;
pub use job::Job;
pub use query::{JobFilter, JobSort};
pub use user::{User, UserRole};
