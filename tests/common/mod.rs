/// Common test utilities for integration tests
///
/// Builds the full router over the in-memory store and the recording
/// mailer, so the tests exercise the real handlers, extractors, and
/// error mapping without external services.

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use gatehouse::{
    app::{build_router, AppState},
    config::{ApiConfig, Config, DatabaseConfig, JwtConfig, SmtpConfig},
    mail::memory::MemoryMailer,
    store::memory::MemoryStore,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Test context containing the router and handles to the collaborators
pub struct TestContext {
    pub app: Router,
    pub store: Arc<MemoryStore>,
    pub mailer: Arc<MemoryMailer>,
}

impl TestContext {
    /// Creates a fresh context with empty store and mailer
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let mailer = Arc::new(MemoryMailer::new());

        let state = AppState::new(
            store.clone(),
            store.clone(),
            mailer.clone(),
            test_config(),
        );

        Self {
            app: build_router(state),
            store,
            mailer,
        }
    }

    /// Sends a JSON POST to the router
    pub async fn post_json(&self, uri: &str, body: Value) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Registers an account through the API, asserting success
    pub async fn register(&self, email: &str, password: &str) -> Value {
        let response = self
            .post_json(
                "/v1/auth/register",
                serde_json::json!({ "user": { "email": email, "password": password } }),
            )
            .await;
        assert_eq!(response.status(), axum::http::StatusCode::CREATED);

        body_json(response).await
    }
}

/// Configuration pointing at nothing real; the database and SMTP
/// sections are unused when the in-memory collaborators are wired in.
pub fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec!["*".to_string()],
            production: false,
        },
        database: DatabaseConfig {
            url: "postgresql://localhost/unused".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: "integration-test-secret-at-least-32-bytes".to_string(),
        },
        smtp: SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            username: "mailer@example.com".to_string(),
            password: "unused".to_string(),
            from: "Gatehouse <mailer@example.com>".to_string(),
        },
    }
}

/// Reads a response body as raw bytes
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Reads a response body as JSON
pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
