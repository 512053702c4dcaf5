//! Shared test helpers for integration tests.
//!
//! Builds the real router over the in-memory stores and a mock identity
//! provider, so the full HTTP surface can be driven without a database
//! or network.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use dashmap::DashMap;
use http::{Request, StatusCode, header};
use tower::ServiceExt;

use classgate_api::state::AppState;
use classgate_auth::credentials::AdminCredentials;
use classgate_auth::identity::{Identity, IdentityProvider};
use classgate_auth::session::store::SessionStore;
use classgate_core::config::AppConfig;
use classgate_core::{AppError, AppResult};
use classgate_database::memory::{MemoryLessonRequestStore, MemoryPaymentRequestStore};
use classgate_database::store::LessonRequestStore;
use classgate_service::account::AccountService;
use classgate_service::lesson::LessonService;

/// Admin credentials used by every test app.
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "test-admin-pw";

/// Identity provider backed by an in-memory account map.
///
/// Error messages mirror the provider's own terse codes, since the
/// handlers surface them verbatim.
#[derive(Debug, Default)]
pub struct MockIdentityProvider {
    accounts: DashMap<String, String>,
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn create_account(&self, email: &str, password: &str) -> AppResult<Identity> {
        if self.accounts.contains_key(email) {
            return Err(AppError::authentication("EMAIL_EXISTS"));
        }
        self.accounts
            .insert(email.to_string(), password.to_string());
        Ok(Identity {
            email: email.to_string(),
            id_token: format!("token-{email}"),
        })
    }

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Identity> {
        match self.accounts.get(email) {
            Some(stored) if *stored == password => Ok(Identity {
                email: email.to_string(),
                id_token: format!("token-{email}"),
            }),
            Some(_) => Err(AppError::authentication("INVALID_PASSWORD")),
            None => Err(AppError::authentication("EMAIL_NOT_FOUND")),
        }
    }

    async fn send_verification(&self, _identity: &Identity) -> AppResult<()> {
        Ok(())
    }
}

/// A decoded test response.
pub struct TestResponse {
    /// Response status.
    pub status: StatusCode,
    /// `Location` header, for redirects.
    pub location: Option<String>,
    /// The `name=value` pair of the `Set-Cookie` header, if one was set.
    pub cookie: Option<String>,
    /// Body as text.
    pub body: String,
}

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Direct handle on the lesson store for seeding and inspection.
    pub lesson_store: Arc<MemoryLessonRequestStore>,
}

impl TestApp {
    /// Create a new test application.
    pub fn new() -> Self {
        let mut config = AppConfig {
            server: Default::default(),
            database: Default::default(),
            store: Default::default(),
            session: Default::default(),
            admin: Default::default(),
            identity: Default::default(),
            logging: Default::default(),
        };
        config.admin.username = ADMIN_USERNAME.to_string();
        config.admin.password = ADMIN_PASSWORD.to_string();

        let lesson_store = Arc::new(MemoryLessonRequestStore::new());

        let state = AppState {
            config: Arc::new(config.clone()),
            sessions: Arc::new(SessionStore::new(&config.session)),
            admin_credentials: Arc::new(AdminCredentials::new(&config.admin)),
            accounts: Arc::new(AccountService::new(
                Arc::new(MockIdentityProvider::default()) as Arc<dyn IdentityProvider>,
            )),
            lessons: Arc::new(LessonService::new(
                Arc::clone(&lesson_store) as Arc<dyn LessonRequestStore>
            )),
            payments: Arc::new(MemoryPaymentRequestStore::new()),
        };

        Self {
            router: classgate_api::build_router(state),
            lesson_store,
        }
    }

    /// Send one request through the router.
    ///
    /// `body`, when present, is sent as a urlencoded form. `cookie` is a
    /// `name=value` pair as returned in [`TestResponse::cookie`].
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<&str>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).to_string());

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            location,
            cookie,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    /// Sign up and log in a user; returns the session cookie pair.
    pub async fn login_user(&self, email: &str, password: &str) -> String {
        self.request(
            "POST",
            "/signup",
            Some(&format!(
                "email={email}&password={password}&confirmPassword={password}"
            )),
            None,
        )
        .await;

        let response = self
            .request(
                "POST",
                "/login",
                Some(&format!("email={email}&password={password}")),
                None,
            )
            .await;
        response.cookie.expect("login should set a session cookie")
    }

    /// Log in as the admin; returns the session cookie pair.
    ///
    /// Pass an existing cookie to stamp the admin grant onto that
    /// session instead of a fresh one.
    pub async fn login_admin(&self, existing_cookie: Option<&str>) -> String {
        let response = self
            .request(
                "POST",
                "/admin-login",
                Some(&format!(
                    "username={ADMIN_USERNAME}&password={ADMIN_PASSWORD}"
                )),
                existing_cookie,
            )
            .await;
        response
            .cookie
            .expect("admin login should set a session cookie")
    }
}
