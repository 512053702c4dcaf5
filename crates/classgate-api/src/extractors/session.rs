//! `CurrentUser` and `CurrentAdmin` extractors, the coarse gates.
//!
//! Both pull the session token from the cookie header and resolve it
//! against the session store. A failed gate redirects silently: to
//! `/login` for the user gate, to `/admin-login` for the admin gate.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum::response::Redirect;
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;

use classgate_auth::session::SESSION_COOKIE;

use crate::state::AppState;

/// The session token presented by the client, if any.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

/// Extracted authenticated end-user, available in handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// The logged-in user's email.
    pub email: String,
    /// The session token the user presented.
    pub token: String,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers).ok_or_else(|| Redirect::to("/login"))?;

        let record = state
            .sessions
            .get(&token)
            .await
            .ok_or_else(|| Redirect::to("/login"))?;

        match record.user_email() {
            Some(email) if !email.is_empty() => Ok(CurrentUser {
                email: email.to_string(),
                token,
            }),
            _ => Err(Redirect::to("/login")),
        }
    }
}

/// Extracted live admin grant, available in admin handlers.
///
/// The grant is re-validated against its own expiry on every request;
/// an expired grant is indistinguishable from an absent one.
#[derive(Debug, Clone)]
pub struct CurrentAdmin {
    /// The session token the admin presented.
    pub token: String,
}

impl FromRequestParts<AppState> for CurrentAdmin {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers).ok_or_else(|| Redirect::to("/admin-login"))?;

        let record = state
            .sessions
            .get(&token)
            .await
            .ok_or_else(|| Redirect::to("/admin-login"))?;

        if record.is_admin(Utc::now()) {
            Ok(CurrentAdmin { token })
        } else {
            Err(Redirect::to("/admin-login"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;

    #[test]
    fn test_session_token_parses_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            "other=1; classgate_session=abc123; theme=dark".parse().unwrap(),
        );
        assert_eq!(session_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_session_token_absent() {
        let headers = HeaderMap::new();
        assert_eq!(session_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "other=1".parse().unwrap());
        assert_eq!(session_token(&headers), None);
    }
}
