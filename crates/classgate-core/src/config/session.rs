//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session management configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session time-to-live in hours. Applies to the whole session record.
    #[serde(default = "default_ttl")]
    pub ttl_hours: u64,
    /// Admin grant time-to-live in minutes.
    ///
    /// The admin capability carried by a session expires on its own
    /// schedule, independent of the session TTL.
    #[serde(default = "default_admin_ttl")]
    pub admin_ttl_minutes: u64,
    /// Maximum number of concurrently held session records.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: default_ttl(),
            admin_ttl_minutes: default_admin_ttl(),
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_ttl() -> u64 {
    24
}

fn default_admin_ttl() -> u64 {
    60
}

fn default_max_sessions() -> u64 {
    10_000
}
