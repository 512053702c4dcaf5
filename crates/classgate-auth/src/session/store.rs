//! In-process session store.
//!
//! Maps an opaque client-presented token to a [`SessionRecord`]. Records
//! expire after the configured TTL; the admin grant inside a record
//! carries its own, shorter expiry stamped at credential-check time.

use std::time::Duration;

use chrono::Utc;
use moka::future::Cache;
use rand::RngExt;
use tracing::debug;

use classgate_core::config::session::SessionConfig;
use classgate_entity::session::{SessionRecord, SessionUser};

/// Length of generated session tokens.
const TOKEN_LEN: usize = 48;

/// TTL-expiring map from session token to session record.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// The underlying moka cache. Whole-record TTL enforcement lives here.
    sessions: Cache<String, SessionRecord>,
    /// How long an admin grant stays valid.
    admin_ttl: chrono::Duration,
}

impl SessionStore {
    /// Create a new session store from configuration.
    pub fn new(config: &SessionConfig) -> Self {
        let sessions = Cache::builder()
            .max_capacity(config.max_sessions)
            .time_to_live(Duration::from_secs(config.ttl_hours * 3600))
            .build();

        Self {
            sessions,
            admin_ttl: chrono::Duration::minutes(config.admin_ttl_minutes as i64),
        }
    }

    /// Create a fresh session and return its token.
    pub async fn create(&self) -> String {
        let token = generate_token();
        let record = SessionRecord {
            user: None,
            admin_until: None,
            created_at: Some(Utc::now()),
        };
        self.sessions.insert(token.clone(), record).await;
        debug!("Created new session");
        token
    }

    /// Look up a live session record by token.
    pub async fn get(&self, token: &str) -> Option<SessionRecord> {
        self.sessions.get(token).await
    }

    /// Return the token of a live session, or create a fresh one.
    pub async fn get_or_create(&self, token: Option<&str>) -> String {
        if let Some(token) = token {
            if self.sessions.contains_key(token) {
                return token.to_string();
            }
        }
        self.create().await
    }

    /// Store the end-user identity on a session.
    pub async fn set_user(&self, token: &str, email: &str) {
        let mut record = self.sessions.get(token).await.unwrap_or_default();
        record.user = Some(SessionUser {
            email: email.to_string(),
        });
        self.sessions.insert(token.to_string(), record).await;
    }

    /// Stamp an admin grant on a session, valid for the admin TTL.
    pub async fn grant_admin(&self, token: &str) {
        let mut record = self.sessions.get(token).await.unwrap_or_default();
        record.admin_until = Some(Utc::now() + self.admin_ttl);
        self.sessions.insert(token.to_string(), record).await;
    }

    /// Destroy a session. Subsequent lookups of the token return nothing.
    pub async fn destroy(&self, token: &str) {
        self.sessions.invalidate(token).await;
        debug!("Destroyed session");
    }
}

/// Generate an opaque alphanumeric session token.
fn generate_token() -> String {
    rand::rng()
        .sample_iter(rand::distr::Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect()
}
