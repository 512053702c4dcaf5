//! Request store backend configuration.

use serde::{Deserialize, Serialize};

/// Request store backend selection.
///
/// `postgres` is the production backend; `memory` keeps all records in
/// process and is intended for local development and the test suite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store provider: `"postgres"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
        }
    }
}

fn default_provider() -> String {
    "postgres".to_string()
}
