//! Lesson handlers: dashboard, request submission, gated content.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

use crate::extractors::CurrentUser;
use crate::state::AppState;
use crate::views;

/// GET /main
pub async fn main_page(State(state): State<AppState>, user: CurrentUser) -> Response {
    match state.lessons.approved_for(&user.email).await {
        Ok(approved) => Html(views::main_page(&user.email, &approved)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list approved lessons");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error retrieving approved lessons.",
            )
                .into_response()
        }
    }
}

/// POST /request-lesson/{day}
pub async fn request_lesson(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(day): Path<String>,
) -> Response {
    match state.lessons.submit_request(&user.email, &day).await {
        Ok(_) => "Request submitted successfully. Waiting for admin approval.".into_response(),
        Err(e) => {
            error!(error = %e, "Failed to submit lesson request");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to submit the request. Please try again later.",
            )
                .into_response()
        }
    }
}

/// GET /lesson/{day}
///
/// The fine-grained gate: the approval check runs against the store on
/// every access, so a fresh approval is visible immediately. A pending
/// request is a normal business state, answered with 200.
pub async fn view_lesson(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(day): Path<String>,
) -> Response {
    match state.lessons.check_approval(&user.email, &day).await {
        Ok(true) => Html(views::lesson_page(&day)).into_response(),
        Ok(false) => "Your request for this lesson is still pending approval.".into_response(),
        Err(e) => {
            error!(error = %e, "Failed to check lesson approval");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving lesson.").into_response()
        }
    }
}
