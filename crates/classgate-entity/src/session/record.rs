//! Ephemeral per-client session state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The end-user identity portion of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Email of the logged-in user.
    pub email: String,
}

/// Server-held per-client state, correlated via a client-presented token.
///
/// The user portion and the admin grant are independent: a session may
/// hold neither, either, or both. The record as a whole expires with the
/// session store's TTL; the admin grant additionally carries its own
/// expiry and an expired grant behaves exactly like an absent one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionRecord {
    /// End-user identity, set by a successful login.
    pub user: Option<SessionUser>,
    /// Admin capability expiry, stamped by the credential check.
    pub admin_until: Option<DateTime<Utc>>,
    /// When the session was created.
    pub created_at: Option<DateTime<Utc>>,
}

impl SessionRecord {
    /// Check whether the session holds an authenticated end-user.
    pub fn is_authenticated(&self) -> bool {
        self.user.as_ref().is_some_and(|u| !u.email.is_empty())
    }

    /// The logged-in user's email, if any.
    pub fn user_email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    /// Check whether the session holds a live admin grant.
    pub fn is_admin(&self, now: DateTime<Utc>) -> bool {
        self.admin_until.is_some_and(|until| until > now)
    }
}
