//! jobdeck - Terminal job board
//!
//! A command-line job board that keeps listings, accounts and applications
//! in a local JSON key-value store. Browse and search jobs, apply as a
//! candidate, or post and manage listings as an employer.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JobdeckError;
