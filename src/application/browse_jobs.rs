//! Browse and search job listings

use crate::application::SessionService;
use crate::domain::query::sort_jobs;
use crate::domain::{Job, JobFilter, JobSort};
use crate::error::{JobdeckError, Result};
use crate::infrastructure::{ApplicationRepository, JobRepository, JsonStore};

/// A job together with viewer-specific context
#[derive(Debug, Clone)]
pub struct JobView {
    pub job: Job,
    /// Whether the logged-in candidate already applied. `None` when the
    /// viewer is not a logged-in candidate.
    pub already_applied: Option<bool>,
}

/// Service for listing and viewing jobs
pub struct BrowseJobsService {
    jobs: JobRepository,
    applications: ApplicationRepository,
    sessions: SessionService,
}

impl BrowseJobsService {
    /// Create a new browse service
    pub fn new(store: JsonStore) -> Self {
        BrowseJobsService {
            jobs: JobRepository::new(store.clone()),
            applications: ApplicationRepository::new(store.clone()),
            sessions: SessionService::new(store),
        }
    }

    /// Filtered, sorted listing
    pub fn list(&self, filter: &JobFilter, sort: JobSort) -> Result<Vec<Job>> {
        let mut jobs: Vec<Job> = self
            .jobs
            .load_all()?
            .into_iter()
            .filter(|job| filter.matches(job))
            .collect();

        sort_jobs(&mut jobs, sort);
        Ok(jobs)
    }

    /// A single job with the viewer's application state
    pub fn detail(&self, job_id: &str) -> Result<JobView> {
        let job = self
            .jobs
            .find_by_id(job_id)?
            .ok_or_else(|| JobdeckError::JobNotFound(job_id.to_string()))?;

        let already_applied = match self.sessions.current()? {
            Some(user) if user.is_candidate() => {
                Some(self.applications.has_applied(&job.id, &user.id)?)
            }
            _ => None,
        };

        Ok(JobView {
            job,
            already_applied,
        })
    }
}
