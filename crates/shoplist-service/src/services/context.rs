//! Service context - dependency container for services
//!
//! Holds the repositories and shared services every use case needs.

use std::sync::Arc;

use shoplist_common::auth::{PasswordService, SessionService};
use shoplist_core::traits::{CartRepository, ItemRepository, UserRepository};
use shoplist_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - Password hashing
/// - Session token issuing/validation
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    item_repo: Arc<dyn ItemRepository>,
    cart_repo: Arc<dyn CartRepository>,

    // Services
    password_service: PasswordService,
    session_service: Arc<SessionService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        item_repo: Arc<dyn ItemRepository>,
        cart_repo: Arc<dyn CartRepository>,
        session_service: Arc<SessionService>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            item_repo,
            cart_repo,
            password_service: PasswordService::new(),
            session_service,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the item repository
    pub fn item_repo(&self) -> &dyn ItemRepository {
        self.item_repo.as_ref()
    }

    /// Get the cart repository
    pub fn cart_repo(&self) -> &dyn CartRepository {
        self.cart_repo.as_ref()
    }

    /// Get the password service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    /// Get the session token service
    pub fn session_service(&self) -> &SessionService {
        self.session_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    item_repo: Option<Arc<dyn ItemRepository>>,
    cart_repo: Option<Arc<dyn CartRepository>>,
    session_service: Option<Arc<SessionService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            item_repo: None,
            cart_repo: None,
            session_service: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn item_repo(mut self, repo: Arc<dyn ItemRepository>) -> Self {
        self.item_repo = Some(repo);
        self
    }

    pub fn cart_repo(mut self, repo: Arc<dyn CartRepository>) -> Self {
        self.cart_repo = Some(repo);
        self
    }

    pub fn session_service(mut self, service: Arc<SessionService>) -> Self {
        self.session_service = Some(service);
        self
    }

    /// Build the service context
    ///
    /// # Errors
    /// Returns an error naming the first missing dependency
    pub fn build(self) -> Result<ServiceContext, &'static str> {
        Ok(ServiceContext::new(
            self.pool.ok_or("pool is required")?,
            self.user_repo.ok_or("user_repo is required")?,
            self.item_repo.ok_or("item_repo is required")?,
            self.cart_repo.ok_or("cart_repo is required")?,
            self.session_service.ok_or("session_service is required")?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
