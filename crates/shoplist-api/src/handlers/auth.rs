//! Authentication handlers
//!
//! Signup, login, and logout. These are browser-facing form endpoints:
//! success responds with a redirect, failure re-renders the form with an
//! inline error instead of a JSON body.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use shoplist_common::SESSION_COOKIE;
use shoplist_service::dto::CredentialsForm;
use shoplist_service::{AuthService, ServiceError};

use crate::pages;
use crate::state::AppState;

/// Serve the signup form
///
/// GET /signup
pub async fn signup_page() -> Html<String> {
    Html(pages::signup_page(None))
}

/// Create a new account and send the browser to the login page
///
/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Response {
    let service = AuthService::new(state.service_context());
    match service.signup(form).await {
        Ok(_) => Redirect::to("/login").into_response(),
        Err(e) => {
            let status =
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let message = signup_error_message(&e);
            (status, Html(pages::signup_page(Some(&message)))).into_response()
        }
    }
}

/// Serve the login form
///
/// GET /login
pub async fn login_page() -> Html<String> {
    Html(pages::login_page(None))
}

/// Verify credentials, set the session cookie, and redirect to the dashboard
///
/// POST /login
///
/// Credential failures all render the same generic inline error with a 401
/// and never set the cookie. Store failures are not credential failures and
/// surface as a server error instead.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CredentialsForm>,
) -> Response {
    let service = AuthService::new(state.service_context());
    match service.login(form).await {
        Ok(session) => {
            let cookie = session_cookie(&state, session.token);
            (jar.add(cookie), Redirect::to("/dashboard")).into_response()
        }
        Err(e) => {
            let (status, message) = login_failure(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "Login failed with server error");
            }
            (status, Html(pages::login_page(Some(message)))).into_response()
        }
    }
}

/// Clear the session cookie and send the browser back to the login page
///
/// GET /logout
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    let mut removal = Cookie::from(SESSION_COOKIE);
    removal.set_path("/");
    (jar.remove(removal), Redirect::to("/login"))
}

fn session_cookie(state: &AppState, token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(state.config().session.cookie_secure)
        .build()
}

/// Pick the status and inline message for a failed login attempt.
///
/// Every client-class failure collapses into the same 401 message so the
/// response never reveals whether the username exists. Server-class failures
/// keep their status so an outage does not read as a bad password.
fn login_failure(error: &ServiceError) -> (StatusCode, &'static str) {
    if error.status_code() < 500 {
        (StatusCode::UNAUTHORIZED, "Invalid username or password")
    } else {
        let status = StatusCode::from_u16(error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, "Something went wrong, please try again")
    }
}

fn signup_error_message(error: &ServiceError) -> String {
    match error {
        ServiceError::Domain(e) if e.is_conflict() => "Username is already taken".to_string(),
        ServiceError::Conflict(_) => "Username is already taken".to_string(),
        ServiceError::App(e) if e.is_client_error() => e.to_string(),
        ServiceError::Validation(msg) => msg.clone(),
        ServiceError::Domain(e) if e.is_validation() => e.to_string(),
        _ => "Signup failed, please try again".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplist_common::AppError;
    use shoplist_core::DomainError;

    #[test]
    fn test_bad_credentials_render_as_401() {
        let err = ServiceError::App(AppError::InvalidCredentials);
        let (status, message) = login_failure(&err);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message, "Invalid username or password");
    }

    #[test]
    fn test_store_failure_is_not_a_credentials_failure() {
        let err = ServiceError::Domain(DomainError::DatabaseError("pool timed out".to_string()));
        let (status, message) = login_failure(&err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_ne!(message, "Invalid username or password");
    }

    #[test]
    fn test_internal_failure_keeps_500() {
        let err = ServiceError::internal("token signing failed");
        let (status, _) = login_failure(&err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_duplicate_username_message() {
        let err = ServiceError::Domain(DomainError::UsernameAlreadyExists);
        assert_eq!(signup_error_message(&err), "Username is already taken");
    }
}
