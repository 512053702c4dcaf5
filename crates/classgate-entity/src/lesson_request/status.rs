//! Lesson request status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle states of a lesson request.
///
/// A request is created `Pending` and moves to `Approved` exactly once,
/// by an admin action. `Approved` is terminal; there is no rejected or
/// reverted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "request_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Submitted by a user, awaiting admin review.
    Pending,
    /// Granted by the admin; the user may view the lesson.
    Approved,
}

impl RequestStatus {
    /// Check if this status grants access to the lesson content.
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
        }
    }
}

impl Default for RequestStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = classgate_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            _ => Err(classgate_core::AppError::validation(format!(
                "Invalid request status: '{s}'. Expected one of: pending, approved"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pending() {
        assert_eq!(RequestStatus::default(), RequestStatus::Pending);
        assert!(!RequestStatus::default().is_approved());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "approved".parse::<RequestStatus>().unwrap(),
            RequestStatus::Approved
        );
        assert_eq!(
            "PENDING".parse::<RequestStatus>().unwrap(),
            RequestStatus::Pending
        );
        assert!("rejected".parse::<RequestStatus>().is_err());
    }
}
