//! Business logic services
//!
//! The authentication service orchestrates validators, the credential
//! store, and the lockout policy behind a small injected context.

pub mod auth;
pub mod context;
pub mod error;

// Re-export all services for convenience
pub use auth::{AuthService, LoginOutcome, RegistrationError, DEFAULT_ATTEMPT_LIMIT};
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
