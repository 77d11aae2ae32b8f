//! # gatehouse-service
//!
//! Application layer containing the authentication orchestration and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AccountCountResponse, HealthResponse, LockStatusResponse, LoginAttemptResponse, LoginRequest,
    LoginResponse, RegisterRequest, RegisterResponse,
};
pub use services::{
    AuthService, LoginOutcome, RegistrationError, ServiceContext, ServiceError, ServiceResult,
    DEFAULT_ATTEMPT_LIMIT,
};
