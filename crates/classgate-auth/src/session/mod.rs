//! Session management.

pub mod store;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "classgate_session";
