//! Route definitions for the ClassGate HTTP surface.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(page_routes())
        .merge(auth_routes())
        .merge(lesson_routes())
        .merge(admin_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Public pages
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::landing))
        .route("/login", get(handlers::pages::login_page))
        .route("/signup", get(handlers::pages::signup_page))
        .route("/admin-login", get(handlers::pages::admin_login_page))
}

/// End-user auth: login, signup, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/signup", post(handlers::auth::signup))
        .route("/logout", post(handlers::auth::logout))
}

/// Lesson dashboard, requests, and gated content
fn lesson_routes() -> Router<AppState> {
    Router::new()
        .route("/main", get(handlers::lessons::main_page))
        .route("/request-lesson/{day}", post(handlers::lessons::request_lesson))
        .route("/lesson/{day}", get(handlers::lessons::view_lesson))
}

/// Admin login, panel, and approvals
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin-login", post(handlers::admin::admin_login))
        .route("/admin", get(handlers::admin::admin_panel))
        .route(
            "/admin/approve-request/{id}",
            post(handlers::admin::approve_request),
        )
}
