//! Apply to a job use case

use crate::application::SessionService;
use crate::domain::{next_id, Application, ApplicationStatus};
use crate::error::{JobdeckError, Result};
use crate::infrastructure::{ApplicationRepository, JobRepository, JsonStore};
use chrono::Utc;

/// Service for candidates applying to jobs
pub struct ApplyService {
    jobs: JobRepository,
    applications: ApplicationRepository,
    sessions: SessionService,
}

impl ApplyService {
    /// Create a new apply service
    pub fn new(store: JsonStore) -> Self {
        ApplyService {
            jobs: JobRepository::new(store.clone()),
            applications: ApplicationRepository::new(store.clone()),
            sessions: SessionService::new(store),
        }
    }

    /// Apply to a job as the logged-in candidate.
    ///
    /// The duplicate check is a query-time guard; the storage layer does
    /// not enforce uniqueness per (job, candidate) pair. Candidate name
    /// and email are copied into the application at this point.
    pub fn execute(
        &self,
        job_id: &str,
        cover_letter: &str,
        resume_url: Option<String>,
    ) -> Result<Application> {
        let user = self.sessions.require_login()?;
        if !user.is_candidate() {
            return Err(JobdeckError::AccessDenied(
                "Only candidate accounts can apply to jobs".to_string(),
            ));
        }

        let job = self
            .jobs
            .find_by_id(job_id)?
            .ok_or_else(|| JobdeckError::JobNotFound(job_id.to_string()))?;

        if self.applications.has_applied(&job.id, &user.id)? {
            return Err(JobdeckError::AlreadyApplied(job.title));
        }

        let application = Application {
            id: next_id(),
            job_id: job.id,
            candidate_id: user.id,
            candidate_name: user.full_name,
            candidate_email: user.email,
            cover_letter: cover_letter.to_string(),
            resume_url,
            applied_at: Utc::now(),
            status: ApplicationStatus::Pending,
        };

        self.applications.upsert(application.clone())?;
        Ok(application)
    }
}
