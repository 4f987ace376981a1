//! Post and delete job listings

use crate::application::SessionService;
use crate::domain::{next_id, Job, User};
use crate::error::{JobdeckError, Result};
use crate::infrastructure::{JobRepository, JsonStore};
use chrono::Utc;

/// Input for posting a job
#[derive(Debug, Clone)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub salary: String,
    pub description: String,
    pub requirements: Option<String>,
    pub featured: bool,
}

/// Service for employers managing their listings
pub struct ManageJobsService {
    jobs: JobRepository,
    sessions: SessionService,
}

impl ManageJobsService {
    /// Create a new job management service
    pub fn new(store: JsonStore) -> Self {
        ManageJobsService {
            jobs: JobRepository::new(store.clone()),
            sessions: SessionService::new(store),
        }
    }

    fn require_employer(&self) -> Result<User> {
        let user = self.sessions.require_login()?;
        if !user.is_employer() {
            return Err(JobdeckError::AccessDenied(
                "Only employer accounts can manage job listings".to_string(),
            ));
        }
        Ok(user)
    }

    /// Post a new listing owned by the logged-in employer
    pub fn post(&self, draft: JobDraft) -> Result<Job> {
        let employer = self.require_employer()?;

        let job = Job {
            id: next_id(),
            title: draft.title,
            company: draft.company,
            location: draft.location,
            job_type: draft.job_type,
            salary: draft.salary,
            description: draft.description,
            requirements: draft.requirements,
            employer_id: employer.id,
            posted_at: Utc::now(),
            featured: draft.featured,
        };

        self.jobs.upsert(job.clone())?;
        Ok(job)
    }

    /// Delete a listing. Ownership is checked here; the repository itself
    /// has no notion of ownership.
    pub fn delete(&self, job_id: &str) -> Result<()> {
        let employer = self.require_employer()?;

        let job = self
            .jobs
            .find_by_id(job_id)?
            .ok_or_else(|| JobdeckError::JobNotFound(job_id.to_string()))?;

        if job.employer_id != employer.id {
            return Err(JobdeckError::AccessDenied(
                "Only the employer who posted a job can delete it".to_string(),
            ));
        }

        self.jobs.delete_by_id(job_id)
    }

    /// Listings owned by the logged-in employer
    pub fn mine(&self) -> Result<Vec<Job>> {
        let employer = self.require_employer()?;
        self.jobs.by_employer(&employer.id)
    }
}
