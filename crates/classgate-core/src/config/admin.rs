//! Admin credential configuration.

use serde::{Deserialize, Serialize};

/// Admin credential configuration.
///
/// There is exactly one shared admin identity. Both values are compared
/// by exact string equality against the submitted admin-login form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Admin username.
    #[serde(default = "default_username")]
    pub username: String,
    /// Admin password.
    #[serde(default = "default_password")]
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
        }
    }
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_password() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}
