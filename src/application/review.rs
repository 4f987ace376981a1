//! List and review applications

use crate::application::SessionService;
use crate::domain::{Application, ApplicationStatus};
use crate::error::{JobdeckError, Result};
use crate::infrastructure::{ApplicationRepository, JobRepository, JsonStore};

/// Service for tracking and reviewing applications
pub struct ReviewService {
    jobs: JobRepository,
    applications: ApplicationRepository,
    sessions: SessionService,
}

impl ReviewService {
    /// Create a new review service
    pub fn new(store: JsonStore) -> Self {
        ReviewService {
            jobs: JobRepository::new(store.clone()),
            applications: ApplicationRepository::new(store.clone()),
            sessions: SessionService::new(store),
        }
    }

    /// Applications submitted by the logged-in candidate
    pub fn list_mine(&self) -> Result<Vec<Application>> {
        let user = self.sessions.require_login()?;
        self.applications.by_candidate(&user.id)
    }

    /// Applications received for one of the logged-in employer's jobs
    pub fn list_for_job(&self, job_id: &str) -> Result<Vec<Application>> {
        let job = self.owned_job(job_id)?;
        self.applications.by_job(&job.id)
    }

    /// Set the status of an application to one of the employer's jobs.
    /// The update is a full-overwrite upsert of the application record.
    pub fn set_status(&self, application_id: &str, status: ApplicationStatus) -> Result<()> {
        let mut application = self
            .applications
            .find_by_id(application_id)?
            .ok_or_else(|| JobdeckError::ApplicationNotFound(application_id.to_string()))?;

        self.owned_job(&application.job_id)?;

        application.status = status;
        self.applications.upsert(application)
    }

    fn owned_job(&self, job_id: &str) -> Result<crate::domain::Job> {
        let user = self.sessions.require_login()?;
        if !user.is_employer() {
            return Err(JobdeckError::AccessDenied(
                "Only employer accounts can review applications".to_string(),
            ));
        }

        let job = self
            .jobs
            .find_by_id(job_id)?
            .ok_or_else(|| JobdeckError::JobNotFound(job_id.to_string()))?;

        if job.employer_id != user.id {
            return Err(JobdeckError::AccessDenied(
                "Only the employer who posted a job can review its applications".to_string(),
            ));
        }

        Ok(job)
    }
}
