//! Application layer - Use cases and orchestration

pub mod accounts;
pub mod apply;
pub mod browse_jobs;
pub mod companies;
pub mod init;
pub mod manage_config;
pub mod manage_jobs;
pub mod review;
pub mod seed;

pub use accounts::{AccountService, NewAccount, SessionService};
pub use apply::ApplyService;
pub use browse_jobs::{BrowseJobsService, JobView};
pub use companies::{CompaniesService, CompanySummary};
pub use init::InitService;
pub use manage_config::ConfigService;
pub use manage_jobs::{JobDraft, ManageJobsService};
pub use review::ReviewService;
pub use seed::SeedService;
