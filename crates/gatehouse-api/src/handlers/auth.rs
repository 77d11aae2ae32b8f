//! Authentication handlers
//!
//! Endpoints for user registration and login.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gatehouse_service::{
    AuthService, LoginOutcome, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};

use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<Created<Json<RegisterResponse>>> {
    let service = AuthService::new(state.service_context());
    let account_id = service
        .register(
            request.username.trim(),
            request.email.trim(),
            &request.password,
            &request.confirm_password,
        )
        .await?;
    Ok(Created(Json(RegisterResponse::new(account_id))))
}

/// Login with username and password
///
/// POST /auth/login
///
/// The outcome decides the status code: 200 on success, 401 for invalid
/// credentials (identical for wrong password and unknown username), 423
/// while the account is locked.
pub async fn login(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Response> {
    let service = AuthService::new(state.service_context());
    let outcome = service
        .authenticate(
            request.username.trim(),
            &request.password,
            &addr.ip().to_string(),
        )
        .await?;

    let status = match outcome {
        LoginOutcome::Success => StatusCode::OK,
        LoginOutcome::InvalidCredentials => StatusCode::UNAUTHORIZED,
        LoginOutcome::Locked => StatusCode::LOCKED,
    };
    Ok((status, Json(LoginResponse::from_outcome(outcome))).into_response())
}
