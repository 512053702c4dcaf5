//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use classgate_auth::credentials::AdminCredentials;
use classgate_auth::session::store::SessionStore;
use classgate_core::config::AppConfig;
use classgate_database::store::PaymentRequestStore;
use classgate_service::account::AccountService;
use classgate_service::lesson::LessonService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// In-process session store.
    pub sessions: Arc<SessionStore>,
    /// Admin credential checker.
    pub admin_credentials: Arc<AdminCredentials>,
    /// Account flows (signup/login delegation).
    pub accounts: Arc<AccountService>,
    /// Lesson request lifecycle and approval checks.
    pub lessons: Arc<LessonService>,
    /// Payment request store.
    pub payments: Arc<dyn PaymentRequestStore>,
}
