//! Lesson request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::RequestStatus;

/// A user's request for access to one lesson day.
///
/// The (email, day) pair is the natural key but is deliberately not
/// unique: duplicate pending requests may coexist and each one is
/// approved independently by id. Rows are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LessonRequest {
    /// Unique request identifier. Approvals target this id.
    pub id: Uuid,
    /// The requesting user's identity.
    pub email: String,
    /// Identifier of the requested lesson day.
    pub day: String,
    /// Approval status.
    pub status: RequestStatus,
    /// When the request was submitted.
    pub created_at: DateTime<Utc>,
    /// When the request was first approved, if it has been.
    pub approved_at: Option<DateTime<Utc>>,
}

impl LessonRequest {
    /// Check whether this request grants the caller access to its day.
    pub fn grants_access(&self, email: &str, day: &str) -> bool {
        self.status.is_approved() && self.email == email && self.day == day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(status: RequestStatus) -> LessonRequest {
        LessonRequest {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            day: "3".to_string(),
            status,
            created_at: Utc::now(),
            approved_at: None,
        }
    }

    #[test]
    fn test_pending_request_grants_nothing() {
        let req = request(RequestStatus::Pending);
        assert!(!req.grants_access("a@x.com", "3"));
    }

    #[test]
    fn test_approved_request_grants_exact_pair_only() {
        let req = request(RequestStatus::Approved);
        assert!(req.grants_access("a@x.com", "3"));
        assert!(!req.grants_access("a@x.com", "4"));
        assert!(!req.grants_access("b@x.com", "3"));
    }
}
