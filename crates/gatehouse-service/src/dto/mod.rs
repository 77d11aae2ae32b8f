//! Data transfer objects for API requests and responses

pub mod requests;
pub mod responses;

pub use requests::{LoginRequest, RegisterRequest};
pub use responses::{
    AccountCountResponse, HealthResponse, LockStatusResponse, LoginAttemptResponse, LoginResponse,
    RegisterResponse,
};
