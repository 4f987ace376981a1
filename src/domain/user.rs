//! User accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role: candidates apply to jobs, employers post them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Candidate,
    Employer,
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "candidate" => Ok(UserRole::Candidate),
            "employer" => Ok(UserRole::Employer),
            other => Err(format!(
                "Invalid role: '{}'. Valid roles: candidate, employer",
                other
            )),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Candidate => write!(f, "candidate"),
            UserRole::Employer => write!(f, "employer"),
        }
    }
}

/// A registered account. Passwords are stored in plaintext; the board is a
/// single-user local store and makes no security claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub user_type: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_employer(&self) -> bool {
        self.user_type == UserRole::Employer
    }

    pub fn is_candidate(&self) -> bool {
        self.user_type == UserRole::Candidate
    }
}
