//! Company directory use case

use crate::error::Result;
use crate::infrastructure::{JobRepository, JsonStore};

/// One company's presence on the board, derived from its listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanySummary {
    pub name: String,
    /// Location of the company's first listing
    pub location: String,
    pub open_positions: usize,
}

/// Service for the company directory
pub struct CompaniesService {
    jobs: JobRepository,
}

impl CompaniesService {
    /// Create a new companies service
    pub fn new(store: JsonStore) -> Self {
        CompaniesService {
            jobs: JobRepository::new(store),
        }
    }

    /// Group listings by company name, in first-seen order
    pub fn execute(&self) -> Result<Vec<CompanySummary>> {
        let mut companies: Vec<CompanySummary> = Vec::new();

        for job in self.jobs.load_all()? {
            match companies.iter_mut().find(|c| c.name == job.company) {
                Some(company) => company.open_positions += 1,
                None => companies.push(CompanySummary {
                    name: job.company,
                    location: job.location,
                    open_positions: 1,
                }),
            }
        }

        Ok(companies)
    }
}
