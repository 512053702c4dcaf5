//! Identity provider adapter.
//!
//! The external identity provider is the system of record for accounts
//! and credentials. ClassGate keeps no local user table; "users" exist
//! only as the distinct emails on lesson request rows.

pub mod rest;

use async_trait::async_trait;

use classgate_core::result::AppResult;

pub use rest::RestIdentityProvider;

/// A verified identity returned by the provider.
#[derive(Debug, Clone)]
pub struct Identity {
    /// The account email.
    pub email: String,
    /// Provider-issued token for follow-up calls (verification email).
    ///
    /// Never stored: session lifetime is governed solely by the local
    /// session store TTL.
    pub id_token: String,
}

/// Operations delegated to the external identity provider.
///
/// Every error is surfaced once to the caller with the provider's raw
/// message embedded; there is no retry and no classification.
#[async_trait]
pub trait IdentityProvider: Send + Sync + 'static {
    /// Create a new account.
    async fn create_account(&self, email: &str, password: &str) -> AppResult<Identity>;

    /// Verify credentials and sign the user in.
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Identity>;

    /// Trigger an out-of-band verification email for a signed-in identity.
    async fn send_verification(&self, identity: &Identity) -> AppResult<()>;
}
