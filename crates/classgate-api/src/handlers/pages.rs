//! Public page handlers.

use axum::response::Html;

use crate::views;

/// GET /
pub async fn landing() -> Html<String> {
    Html(views::landing_page())
}

/// GET /login
pub async fn login_page() -> Html<String> {
    Html(views::login_page())
}

/// GET /signup
pub async fn signup_page() -> Html<String> {
    Html(views::signup_page())
}

/// GET /admin-login
pub async fn admin_login_page() -> Html<String> {
    Html(views::admin_login_page())
}
