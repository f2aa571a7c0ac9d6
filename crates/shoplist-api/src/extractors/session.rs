//! Session extractor
//!
//! Extracts and validates the session token from the `session` cookie.
//! Every gated endpoint takes a [`SessionUser`]; requests without a valid
//! cookie never reach the handler and get bounced to the login page.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use shoplist_common::SESSION_COOKIE;
use shoplist_core::UserId;

use crate::state::AppState;

/// Rejection that redirects the browser to the login page (303)
#[derive(Debug, Clone, Copy)]
pub struct AuthRedirect;

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        Redirect::to("/login").into_response()
    }
}

/// Authenticated user extracted from the session cookie
#[derive(Debug, Clone)]
pub struct SessionUser {
    /// User ID from the session token
    pub user_id: UserId,
}

impl SessionUser {
    /// Create a new SessionUser
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| AuthRedirect)?;

        let token = jar.get(SESSION_COOKIE).ok_or(AuthRedirect)?.value();

        let app_state = AppState::from_ref(state);

        let user_id = app_state
            .session_service()
            .user_id_from_token(token)
            .map_err(|e| {
                tracing::debug!(error = %e, "Invalid session token");
                AuthRedirect
            })?;

        Ok(SessionUser::new(user_id))
    }
}
