use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::estimator::ProfileQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    JobSeeker,
    Recruiter,
    Admin,
}

impl Role {
    /// Parses stored role strings. Comparison is trimmed and case-insensitive,
    /// so the legacy `jobSeeker` spelling maps to `JobSeeker`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "jobseeker" | "job_seeker" => Some(Role::JobSeeker),
            "recruiter" => Some(Role::Recruiter),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// A user's profile as stored by the account service. Read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfileRow {
    pub user_id: Uuid,
    pub role: String,
    pub career: Option<String>,
    pub location: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfileRow {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    pub fn to_query(&self) -> ProfileQuery {
        ProfileQuery {
            career: self.career.clone(),
            location: self.location.clone(),
            experience: self.experience.clone(),
            education: self.education.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_is_lenient_on_case_and_space() {
        assert_eq!(Role::parse("jobSeeker"), Some(Role::JobSeeker));
        assert_eq!(Role::parse("  JOBSEEKER "), Some(Role::JobSeeker));
        assert_eq!(Role::parse("recruiter"), Some(Role::Recruiter));
        assert_eq!(Role::parse("Admin"), Some(Role::Admin));
        assert_eq!(Role::parse("guest"), None);
        assert_eq!(Role::parse(""), None);
    }
}
