//! Job listings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A posted job listing.
///
/// `job_type` and `salary` are free-form display strings: the type is
/// conventionally one of Full-time/Part-time/Contract/Freelance, and the
/// salary is whatever the employer typed (e.g. "$120k - $180k").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub salary: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    pub employer_id: String,
    pub posted_at: DateTime<Utc>,
    pub featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_wire_format() {
        let job = Job {
            id: "1".to_string(),
            title: "Senior Software Engineer".to_string(),
            company: "TechCorp".to_string(),
            location: "San Francisco, CA".to_string(),
            job_type: "Full-time".to_string(),
            salary: "$120k - $180k".to_string(),
            description: "Build things".to_string(),
            requirements: None,
            employer_id: "42".to_string(),
            posted_at: Utc::now(),
            featured: true,
        };

        let json = serde_json::to_string(&job).unwrap();
        assert!(json.contains("\"type\":\"Full-time\""));
        assert!(json.contains("\"employerId\":\"42\""));
        assert!(json.contains("\"postedAt\""));
        assert!(!json.contains("requirements"));

        let back: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(back, job);
    }
}
