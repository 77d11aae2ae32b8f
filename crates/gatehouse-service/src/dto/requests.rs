//! Request DTOs for API endpoints
//!
//! These carry raw input only. Field checks live in
//! `gatehouse_core::validation` because the contract pins both the order of
//! the rules and the exact reason strings; derive-based validation would
//! report rule violations in its own order.

use serde::Deserialize;

/// User registration request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
