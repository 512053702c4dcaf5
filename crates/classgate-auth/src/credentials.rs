//! Admin credential check.

use classgate_core::config::admin::AdminConfig;

/// The single shared admin credential pair.
///
/// Verification is exact string equality on both fields. A failed check
/// reports only that the pair did not match, never which field was wrong.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    /// Create the credential checker from configuration.
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }

    /// Check a submitted username/password pair.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> AdminCredentials {
        AdminCredentials::new(&AdminConfig {
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        })
    }

    #[test]
    fn test_exact_pair_verifies() {
        assert!(credentials().verify("admin", "hunter2"));
    }

    #[test]
    fn test_any_wrong_field_fails() {
        let creds = credentials();
        assert!(!creds.verify("admin", "wrong"));
        assert!(!creds.verify("wrong", "hunter2"));
        assert!(!creds.verify("", ""));
        assert!(!creds.verify("Admin", "hunter2"));
    }
}
