//! Test helpers for integration tests
//!
//! Spawns in-process API servers on ephemeral ports, backed by the
//! in-memory repositories, and provides small HTTP assertion utilities.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use gatehouse_api::{create_app, AppState};
use gatehouse_core::LockoutPolicy;
use gatehouse_db::{MemoryAccountRepository, MemoryLoginAttemptRepository};
use gatehouse_service::ServiceContext;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::test_config;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server with the default lockout policy
    pub async fn start() -> Result<Self> {
        Self::start_with_policy(LockoutPolicy::default()).await
    }

    /// Start a test server with a custom lockout policy.
    ///
    /// A zero-duration policy makes locks expire the instant they are set,
    /// which simulates the lockout window elapsing between requests.
    pub async fn start_with_policy(policy: LockoutPolicy) -> Result<Self> {
        let accounts = Arc::new(MemoryAccountRepository::new(policy.clone()));
        let attempts = Arc::new(MemoryLoginAttemptRepository::new());
        let service_context =
            ServiceContext::new(accounts, attempts).with_lockout_policy(policy);
        let state = AppState::new(service_context, test_config());

        // Build application
        let app = create_app(state);

        // Bind an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url()))
            .send()
            .await?;
        Ok(response)
    }

    /// Make a POST request with a JSON body
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Response> {
        let response = self
            .client
            .post(format!("{}{path}", self.base_url()))
            .json(body)
            .send()
            .await?;
        Ok(response)
    }
}

/// Assert a response status, surfacing the body on mismatch
pub async fn assert_status(response: Response, expected: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected {
        let body = response.text().await.unwrap_or_default();
        bail!("expected status {expected}, got {status}: {body}");
    }
    Ok(())
}

/// Assert a response status and deserialize the JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected: StatusCode,
) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    if status != expected {
        bail!("expected status {expected}, got {status}: {body}");
    }
    Ok(serde_json::from_str(&body)?)
}
