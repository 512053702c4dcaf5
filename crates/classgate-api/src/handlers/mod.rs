//! Route handlers.
//!
//! Handlers catch their own failures and map them to the ad hoc
//! plain-text responses this application uses; nothing propagates past
//! the route boundary.

pub mod admin;
pub mod auth;
pub mod lessons;
pub mod pages;

use axum_extra::extract::cookie::Cookie;

use classgate_auth::session::SESSION_COOKIE;

/// Build the session cookie carrying the given token.
pub(crate) fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .build()
}
