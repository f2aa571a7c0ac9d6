//! Signed session tokens
//!
//! The session marker is an HS256-signed token carried in an HTTP-only
//! cookie. Claims hold the user id as subject plus issue/expiry timestamps
//! and a per-login session uuid. Stateless: logout removes the cookie, the
//! token simply ages out.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shoplist_core::UserId;

use crate::error::AppError;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "session";

/// Session token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Per-login session identifier
    pub sid: String,
}

impl SessionClaims {
    /// Get the user ID from the subject claim
    ///
    /// # Errors
    /// Returns an error if the subject cannot be parsed as a user id
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.sub
            .parse::<i64>()
            .map(UserId::new)
            .map_err(|_| AppError::InvalidSession)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Service for issuing and validating session tokens
#[derive(Clone)]
pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl SessionService {
    /// Create a new session service with the given secret and time-to-live
    #[must_use]
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    /// Session time-to-live in seconds
    #[must_use]
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// Issue a session token for a user
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, user_id: UserId) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.ttl_seconds)).timestamp(),
            sid: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Session encoding failed: {e}")))
    }

    /// Validate a session token and return its claims
    ///
    /// # Errors
    /// Returns `AppError::InvalidSession` if the token is malformed, has a
    /// bad signature, or is expired
    pub fn validate(&self, token: &str) -> Result<SessionClaims, AppError> {
        decode::<SessionClaims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AppError::InvalidSession)
    }

    /// Validate a token and extract the user id in one step
    ///
    /// # Errors
    /// Returns `AppError::InvalidSession` on any validation failure
    pub fn user_id_from_token(&self, token: &str) -> Result<UserId, AppError> {
        self.validate(token)?.user_id()
    }
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}
