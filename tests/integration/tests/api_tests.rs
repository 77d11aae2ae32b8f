//! API Integration Tests
//!
//! End-to-end tests over HTTP against an in-process server backed by
//! in-memory repositories. No external services are required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use gatehouse_core::LockoutPolicy;
use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health and monitoring
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.expect("Request failed");
    let health: HealthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(health.status, "healthy");
    assert!(!health.version.is_empty());
}

#[tokio::test]
async fn test_account_count_grows() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/users/count").await.unwrap();
    let count: AccountCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.user_count, 0);

    server
        .post("/api/v1/auth/register", &RegisterRequest::unique())
        .await
        .unwrap();

    let response = server.get("/api/v1/users/count").await.unwrap();
    let count: AccountCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.user_count, 1);
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::named("alice");

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let body: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(!body.account_id.is_empty());
    assert_eq!(body.message, "Registration successful! Please log in.");
}

#[tokio::test]
async fn test_register_duplicate_conflicts() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/v1/auth/register", &request).await.unwrap();

    // Second registration with the same username and email
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "DUPLICATE_ACCOUNT");
    assert_eq!(body.error.message, "Username or email already exists");
}

#[tokio::test]
async fn test_register_missing_fields() {
    let server = TestServer::start().await.expect("Failed to start server");

    let mut request = RegisterRequest::unique();
    request.username = String::new();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "MISSING_FIELD");
    assert_eq!(body.error.message, "All fields are required");
}

#[tokio::test]
async fn test_register_rejects_weak_password_with_first_failing_rule() {
    let server = TestServer::start().await.expect("Failed to start server");

    // Length and lowercase pass; uppercase is the first rule to fail
    let mut request = RegisterRequest::unique();
    request.password = "password".to_string();
    request.confirm_password = "password".to_string();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_PASSWORD");
    assert_eq!(
        body.error.message,
        "Password must contain at least one uppercase letter"
    );
}

#[tokio::test]
async fn test_register_rejects_invalid_email() {
    let server = TestServer::start().await.expect("Failed to start server");

    let mut request = RegisterRequest::unique();
    request.email = "not-an-email".to_string();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_EMAIL");
}

#[tokio::test]
async fn test_register_rejects_password_mismatch() {
    let server = TestServer::start().await.expect("Failed to start server");

    let mut request = RegisterRequest::unique();
    request.confirm_password = "Different123!".to_string();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "PASSWORD_MISMATCH");
    assert_eq!(body.error.message, "Passwords do not match");
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_register_then_login() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::named("alice");

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let login = LoginRequest::from_register(&request);
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    let body: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.outcome, "success");
    assert_eq!(body.message, "Login successful!");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &request).await.unwrap();

    let login = LoginRequest::wrong_password(&request);
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    let body: LoginResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.outcome, "invalid_credentials");
}

#[tokio::test]
async fn test_login_responses_do_not_reveal_username_existence() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::named("realuser");
    server.post("/api/v1/auth/register", &request).await.unwrap();

    // Wrong password for an existing account
    let wrong = LoginRequest::wrong_password(&request);
    let response = server.post("/api/v1/auth/login", &wrong).await.unwrap();
    let wrong_status = response.status();
    let wrong_body = response.text().await.unwrap();

    // Any password for a missing account
    let unknown = LoginRequest {
        username: "doesnotexist".to_string(),
        password: "Whatever123!".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &unknown).await.unwrap();
    let unknown_status = response.status();
    let unknown_body = response.text().await.unwrap();

    // Status and body are byte-identical across the two cases
    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_status, unknown_status);
    assert_eq!(wrong_body, unknown_body);
}

// ============================================================================
// Lockout
// ============================================================================

#[tokio::test]
async fn test_sixth_attempt_locks_even_with_correct_password() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::named("bob");
    server.post("/api/v1/auth/register", &request).await.unwrap();

    let wrong = LoginRequest::wrong_password(&request);
    for _ in 0..5 {
        let response = server.post("/api/v1/auth/login", &wrong).await.unwrap();
        assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
    }

    // Correct password, but the account just locked
    let correct = LoginRequest::from_register(&request);
    let response = server.post("/api/v1/auth/login", &correct).await.unwrap();
    let body: LoginResponse = assert_json(response, StatusCode::LOCKED).await.unwrap();
    assert_eq!(body.outcome, "locked");

    // The monitoring surface agrees
    let response = server.get("/api/v1/accounts/bob/lock").await.unwrap();
    let status: LockStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(status.locked);
}

#[tokio::test]
async fn test_login_succeeds_after_lock_expires() {
    // Zero-duration locks expire immediately, simulating the 30-minute
    // window elapsing between requests
    let server = TestServer::start_with_policy(LockoutPolicy::new(5, chrono::Duration::zero()))
        .await
        .expect("Failed to start server");
    let request = RegisterRequest::named("bob");
    server.post("/api/v1/auth/register", &request).await.unwrap();

    let wrong = LoginRequest::wrong_password(&request);
    for _ in 0..5 {
        let response = server.post("/api/v1/auth/login", &wrong).await.unwrap();
        assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
    }

    // The lock has already elapsed; the next check clears it lazily
    let correct = LoginRequest::from_register(&request);
    let response = server.post("/api/v1/auth/login", &correct).await.unwrap();
    let body: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.outcome, "success");

    let response = server.get("/api/v1/accounts/bob/lock").await.unwrap();
    let status: LockStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!status.locked);
}

#[tokio::test]
async fn test_lock_status_for_unknown_username() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/accounts/ghost/lock").await.unwrap();
    let status: LockStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!status.locked);
}

// ============================================================================
// Login attempt audit log
// ============================================================================

#[tokio::test]
async fn test_login_attempts_are_recorded_newest_first() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::named("carol");
    server.post("/api/v1/auth/register", &request).await.unwrap();

    let wrong = LoginRequest::wrong_password(&request);
    server.post("/api/v1/auth/login", &wrong).await.unwrap();
    let correct = LoginRequest::from_register(&request);
    server.post("/api/v1/auth/login", &correct).await.unwrap();

    let response = server.get("/api/v1/login-attempts/carol").await.unwrap();
    let attempts: Vec<LoginAttemptRecord> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(attempts.len(), 2);
    assert!(attempts[0].success, "newest attempt first");
    assert!(!attempts[1].success);
    assert!(attempts.iter().all(|a| a.username == "carol"));
    assert!(attempts.iter().all(|a| !a.source_address.is_empty()));
}

#[tokio::test]
async fn test_login_attempts_limit_parameter() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::named("dave");
    server.post("/api/v1/auth/register", &request).await.unwrap();

    let wrong = LoginRequest::wrong_password(&request);
    for _ in 0..4 {
        server.post("/api/v1/auth/login", &wrong).await.unwrap();
    }

    let response = server
        .get("/api/v1/login-attempts/dave?limit=2")
        .await
        .unwrap();
    let attempts: Vec<LoginAttemptRecord> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(attempts.len(), 2);
}

#[tokio::test]
async fn test_login_attempts_for_unknown_username_are_empty() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/login-attempts/nobody").await.unwrap();
    let attempts: Vec<LoginAttemptRecord> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(attempts.is_empty());
}

#[tokio::test]
async fn test_attempts_against_unknown_usernames_are_still_audited() {
    let server = TestServer::start().await.expect("Failed to start server");

    let login = LoginRequest {
        username: "phantom".to_string(),
        password: "Whatever123!".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get("/api/v1/login-attempts/phantom").await.unwrap();
    let attempts: Vec<LoginAttemptRecord> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(attempts.len(), 1);
    assert!(!attempts[0].success);
}
