//! Job filtering and sorting

use crate::domain::Job;
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

fn non_digit_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\D").unwrap())
}

/// Case-insensitive substring match against title, company and description.
/// An empty term matches every job.
pub fn matches_search(job: &Job, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    job.title.to_lowercase().contains(&term)
        || job.company.to_lowercase().contains(&term)
        || job.description.to_lowercase().contains(&term)
}

/// Case-insensitive substring match against location. Empty matches all.
pub fn matches_location(job: &Job, term: &str) -> bool {
    term.is_empty() || job.location.to_lowercase().contains(&term.to_lowercase())
}

/// Exact match against the employment-type tag. `None` means no filter.
pub fn matches_type(job: &Job, filter: Option<&str>) -> bool {
    match filter {
        Some(t) => job.job_type == t,
        None => true,
    }
}

/// The number used for salary ordering: every non-digit character in the
/// display string is deleted and the remaining digits are parsed as one
/// concatenated number, so "$80k - $120k" orders as 80120. A string with
/// no digits orders as 0.
pub fn salary_figure(salary: &str) -> u64 {
    non_digit_regex()
        .replace_all(salary, "")
        .parse()
        .unwrap_or(0)
}

/// Combined listing filter, one field per search control
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub search: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub company: Option<String>,
}

impl JobFilter {
    pub fn matches(&self, job: &Job) -> bool {
        matches_search(job, self.search.as_deref().unwrap_or(""))
            && matches_location(job, self.location.as_deref().unwrap_or(""))
            && matches_type(job, self.job_type.as_deref())
            && self.company.as_deref().is_none_or(|c| job.company == c)
    }
}

/// Listing sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobSort {
    /// Descending by posting timestamp
    #[default]
    Newest,
    /// Descending by the digit-concatenation salary figure
    Salary,
}

impl FromStr for JobSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(JobSort::Newest),
            "salary" => Ok(JobSort::Salary),
            other => Err(format!(
                "Invalid sort: '{}'. Valid sorts: newest, salary",
                other
            )),
        }
    }
}

/// Sort jobs in place according to the requested order
pub fn sort_jobs(jobs: &mut [Job], sort: JobSort) {
    match sort {
        JobSort::Newest => jobs.sort_by(|a, b| b.posted_at.cmp(&a.posted_at)),
        JobSort::Salary => {
            jobs.sort_by(|a, b| salary_figure(&b.salary).cmp(&salary_figure(&a.salary)))
        }
    }
}
