//! Monitoring handlers
//!
//! Read-only endpoints for security monitoring: account totals, the login
//! attempt audit log, and per-account lock state.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use gatehouse_service::{
    AccountCountResponse, AuthService, LockStatusResponse, LoginAttemptResponse,
    DEFAULT_ATTEMPT_LIMIT,
};

use crate::response::ApiResult;
use crate::state::AppState;

/// Maximum attempts returned per request
const MAX_ATTEMPT_LIMIT: i64 = 100;

/// Query parameters for the attempts listing
#[derive(Debug, Deserialize)]
pub struct AttemptsQuery {
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Get the total registered account count
///
/// GET /users/count
pub async fn account_count(State(state): State<AppState>) -> ApiResult<Json<AccountCountResponse>> {
    let service = AuthService::new(state.service_context());
    let user_count = service.count_accounts().await?;
    Ok(Json(AccountCountResponse { user_count }))
}

/// Get recent login attempts for a username, newest first
///
/// GET /login-attempts/:username
pub async fn login_attempts(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<AttemptsQuery>,
) -> ApiResult<Json<Vec<LoginAttemptResponse>>> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_ATTEMPT_LIMIT)
        .clamp(1, MAX_ATTEMPT_LIMIT);

    let service = AuthService::new(state.service_context());
    let attempts = service.list_attempts(&username, limit).await?;
    Ok(Json(
        attempts.into_iter().map(LoginAttemptResponse::from).collect(),
    ))
}

/// Get the current lock state of an account
///
/// GET /accounts/:username/lock
///
/// Performs the same lazy expiry check as authentication, so an elapsed
/// lock reads as unlocked. Unknown usernames are never locked.
pub async fn lock_status(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<LockStatusResponse>> {
    let service = AuthService::new(state.service_context());
    let locked = service.is_locked(&username).await?;
    Ok(Json(LockStatusResponse { username, locked }))
}
