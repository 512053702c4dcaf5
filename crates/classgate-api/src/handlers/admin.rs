//! Admin handlers: credential check, request list, approval.

use axum::Form;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::{error, warn};
use uuid::Uuid;

use classgate_auth::session::SESSION_COOKIE;

use crate::dto::forms::AdminLoginForm;
use crate::extractors::CurrentAdmin;
use crate::handlers::session_cookie;
use crate::state::AppState;
use crate::views;

/// POST /admin-login
///
/// On a matching credential pair the session receives an admin grant
/// with its own TTL. Any mismatch redirects back without revealing
/// which field was wrong.
pub async fn admin_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<AdminLoginForm>,
) -> Response {
    if !state.admin_credentials.verify(&form.username, &form.password) {
        warn!("Rejected admin login attempt");
        return Redirect::to("/admin-login").into_response();
    }

    let token = state
        .sessions
        .get_or_create(jar.get(SESSION_COOKIE).map(|c| c.value()))
        .await;
    state.sessions.grant_admin(&token).await;

    (jar.add(session_cookie(token)), Redirect::to("/admin")).into_response()
}

/// GET /admin
pub async fn admin_panel(State(state): State<AppState>, _admin: CurrentAdmin) -> Response {
    match state.lessons.all_requests().await {
        Ok(requests) => Html(views::admin_page(&requests)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list lesson requests");
            "Failed to fetch lesson requests.".into_response()
        }
    }
}

/// POST /admin/approve-request/{id}
///
/// An unknown id surfaces like any other store failure; the admin gets
/// no distinct not-found signal.
pub async fn approve_request(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
    Path(id): Path<Uuid>,
) -> Response {
    match state.lessons.approve_request(id).await {
        Ok(_) => Redirect::to("/admin").into_response(),
        Err(e) => {
            error!(error = %e, request_id = %id, "Failed to approve lesson request");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to approve the request. Please try again later.",
            )
                .into_response()
        }
    }
}
