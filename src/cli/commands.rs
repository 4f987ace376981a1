//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jobdeck")]
#[command(about = "Terminal job board", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new job board
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Board name
        #[arg(short, long, default_value = "jobdeck")]
        name: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Create an account
    Register {
        /// Email address (assumed unique)
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Company name (employers)
        #[arg(long)]
        company: Option<String>,

        /// Account role (candidate, employer)
        #[arg(long, default_value = "candidate")]
        role: String,
    },

    /// Log in and start a session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// End the current session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Post a job listing (employers only)
    Post {
        #[arg(long)]
        title: String,

        #[arg(long)]
        company: String,

        #[arg(long)]
        location: String,

        /// Employment type (e.g. Full-time, Part-time, Contract, Freelance)
        #[arg(long = "type", value_name = "TYPE")]
        job_type: String,

        /// Salary display string (e.g. "$120k - $180k")
        #[arg(long)]
        salary: String,

        #[arg(long)]
        description: String,

        /// Newline-delimited requirements
        #[arg(long)]
        requirements: Option<String>,

        /// Mark the listing as featured
        #[arg(long)]
        featured: bool,
    },

    /// List and search job listings
    Jobs {
        /// Free-text search over title, company and description
        #[arg(short, long)]
        search: Option<String>,

        /// Location substring filter
        #[arg(short, long)]
        location: Option<String>,

        /// Employment type filter (exact match)
        #[arg(long = "type", value_name = "TYPE")]
        job_type: Option<String>,

        /// Company filter (exact match)
        #[arg(long)]
        company: Option<String>,

        /// Sort order (newest, salary)
        #[arg(long, default_value = "newest")]
        sort: String,

        /// Show only featured listings
        #[arg(long)]
        featured: bool,
    },

    /// Show one job listing
    Show {
        /// Job id
        id: String,
    },

    /// Delete a job listing (owner only)
    Delete {
        /// Job id
        id: String,
    },

    /// Apply to a job (candidates only)
    Apply {
        /// Job id
        id: String,

        /// Cover letter text
        #[arg(long, default_value = "")]
        cover_letter: String,

        /// Resume link
        #[arg(long)]
        resume: Option<String>,
    },

    /// List applications: yours as a candidate, or a job's inbox with --job
    Applications {
        /// Show applications received for this job (employers only)
        #[arg(long)]
        job: Option<String>,
    },

    /// Set the status of an application (employers only)
    Review {
        /// Application id
        id: String,

        /// New status (pending, reviewed, accepted, rejected)
        status: String,
    },

    /// List companies with open positions
    Companies,

    /// Seed the board with sample listings
    Seed,
}
