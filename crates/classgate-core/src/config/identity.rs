//! Identity provider configuration.

use serde::{Deserialize, Serialize};

/// External identity provider configuration.
///
/// The provider is the system of record for account creation and
/// credential verification; ClassGate keeps no local user table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Base URL of the identity provider REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key appended to every provider request.
    #[serde(default)]
    pub api_key: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://identitytoolkit.googleapis.com/v1".to_string()
}

fn default_timeout() -> u64 {
    10
}
