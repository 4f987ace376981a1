//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_application_list, format_company_list, format_job_detail, format_job_list,
};
