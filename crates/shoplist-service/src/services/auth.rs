//! Authentication service
//!
//! Handles signup, login, and session token issuance.

use shoplist_common::auth::validate_password;
use shoplist_common::AppError;
use shoplist_core::entities::User;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::CredentialsForm;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// A freshly authenticated session: the user plus the token to set as cookie
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub user: User,
    pub token: String,
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new user account
    ///
    /// Uniqueness is enforced solely by the database constraint; a duplicate
    /// username surfaces as a conflict, never as a pre-check race.
    #[instrument(skip(self, form), fields(username = %form.username))]
    pub async fn signup(&self, form: CredentialsForm) -> ServiceResult<User> {
        form.validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        validate_password(&form.password).map_err(ServiceError::from)?;

        let password_hash = self
            .ctx
            .password_service()
            .hash(&form.password)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let user = self
            .ctx
            .user_repo()
            .create(&form.username, &password_hash)
            .await?;

        info!(user_id = %user.id, "User signed up");

        Ok(user)
    }

    /// Verify credentials and issue a session token
    ///
    /// Unknown username and wrong password both collapse into the same
    /// `InvalidCredentials` error so the response never leaks which it was.
    #[instrument(skip(self, form), fields(username = %form.username))]
    pub async fn login(&self, form: CredentialsForm) -> ServiceResult<AuthenticatedSession> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&form.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %form.username, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        self.ctx
            .password_service()
            .verify_or_error(&form.password, &password_hash)
            .map_err(|e| {
                warn!(user_id = %user.id, "Login failed: password mismatch");
                ServiceError::App(e)
            })?;

        let token = self
            .ctx
            .session_service()
            .issue(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(user_id = %user.id, "User logged in");

        Ok(AuthenticatedSession { user, token })
    }
}
