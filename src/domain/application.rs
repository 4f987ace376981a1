//! Job applications

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review status of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ApplicationStatus::Pending),
            "reviewed" => Ok(ApplicationStatus::Reviewed),
            "accepted" => Ok(ApplicationStatus::Accepted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Reviewed => write!(f, "reviewed"),
            ApplicationStatus::Accepted => write!(f, "accepted"),
            ApplicationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A candidate's application to a job.
///
/// Candidate name and email are copied in at apply time and never synced
/// with the account record afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub candidate_id: String,
    pub candidate_name: String,
    pub candidate_email: String,
    pub cover_letter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub status: ApplicationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            ApplicationStatus::from_str("pending").unwrap(),
            ApplicationStatus::Pending
        );
        assert_eq!(
            ApplicationStatus::from_str("Accepted").unwrap(),
            ApplicationStatus::Accepted
        );
        assert!(ApplicationStatus::from_str("archived").is_err());
    }

    #[test]
    fn test_application_wire_format() {
        let app = Application {
            id: "9".to_string(),
            job_id: "1".to_string(),
            candidate_id: "2".to_string(),
            candidate_name: "Jane Doe".to_string(),
            candidate_email: "jane@example.com".to_string(),
            cover_letter: "I would be a great fit.".to_string(),
            resume_url: Some("https://example.com/cv.pdf".to_string()),
            applied_at: Utc::now(),
            status: ApplicationStatus::Pending,
        };

        let json = serde_json::to_string(&app).unwrap();
        assert!(json.contains("\"jobId\":\"1\""));
        assert!(json.contains("\"candidateEmail\":\"jane@example.com\""));
        assert!(json.contains("\"status\":\"pending\""));

        let back: Application = serde_json::from_str(&json).unwrap();
        assert_eq!(back, app);
    }
}
