//! Signup and login orchestration.

use std::sync::Arc;

use tracing::{info, warn};

use classgate_auth::identity::{Identity, IdentityProvider};
use classgate_core::result::AppResult;

/// Orchestrates account flows against the identity provider.
///
/// No local user record is ever created; the provider is the system of
/// record and the session store holds the only in-process trace of a
/// logged-in user.
#[derive(Clone)]
pub struct AccountService {
    /// External identity provider.
    identity: Arc<dyn IdentityProvider>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    /// Creates an account, signs it in, and fires the verification email.
    pub async fn sign_up(&self, email: &str, password: &str) -> AppResult<Identity> {
        self.identity.create_account(email, password).await?;
        let identity = self.identity.sign_in(email, password).await?;
        self.identity.send_verification(&identity).await?;
        info!(email = %identity.email, "Account created, verification email sent");
        Ok(identity)
    }

    /// Verifies credentials with the provider.
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<Identity> {
        match self.identity.sign_in(email, password).await {
            Ok(identity) => {
                info!(email = %identity.email, "User signed in");
                Ok(identity)
            }
            Err(e) => {
                warn!(error = %e.message, "Sign-in rejected by identity provider");
                Err(e)
            }
        }
    }
}
