//! Axum extractors for request handling
//!
//! Custom extractors for session authentication and validation.

mod session;
mod validated;

pub use session::{AuthRedirect, SessionUser};
pub use validated::ValidatedJson;
