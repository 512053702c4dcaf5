//! End-user auth handlers: login, signup, logout.

use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use validator::Validate;

use classgate_auth::session::SESSION_COOKIE;

use crate::dto::forms::{LoginForm, SignupForm};
use crate::handlers::session_cookie;
use crate::state::AppState;

/// POST /login
///
/// Delegates credential verification to the identity provider. On
/// success the session holds the email and the client is sent to
/// `/main`; any failure is a plain 200 with the provider's message.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    if let Err(e) = form.validate() {
        return format!("Login failed: {e}").into_response();
    }

    match state.accounts.sign_in(&form.email, &form.password).await {
        Ok(identity) => {
            let token = state
                .sessions
                .get_or_create(jar.get(SESSION_COOKIE).map(|c| c.value()))
                .await;
            state.sessions.set_user(&token, &identity.email).await;

            (jar.add(session_cookie(token)), Redirect::to("/main")).into_response()
        }
        Err(e) => format!("Login failed: {}", e.message).into_response(),
    }
}

/// POST /signup
///
/// Creates the account at the identity provider, signs it in once to
/// trigger the verification email, and reports the outcome as plain
/// text. The session is left untouched.
pub async fn signup(State(state): State<AppState>, Form(form): Form<SignupForm>) -> Response {
    if form.password != form.confirm_password {
        return "Passwords do not match.".into_response();
    }
    if let Err(e) = form.validate() {
        return format!("Signup failed: {e}").into_response();
    }

    match state.accounts.sign_up(&form.email, &form.password).await {
        Ok(_) => "Signup successful! Check your email for verification.".into_response(),
        Err(e) => format!("Signup failed: {}", e.message).into_response(),
    }
}

/// POST /logout
///
/// Destroys the whole session, admin grant included.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.destroy(cookie.value()).await;
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/").build());
    (jar, Redirect::to("/")).into_response()
}
