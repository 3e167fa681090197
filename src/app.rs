/// Application state and router builder
///
/// `AppState` bundles the workflow's collaborators behind trait objects
/// so the same router runs over Postgres + SMTP in production and over
/// the in-memory doubles in tests.
///
/// # Routes
///
/// ```text
/// /
/// ├── /health                          # Liveness + store connectivity
/// └── /v1/auth/
///     ├── POST /register               # Create account, email notice, issue token
///     ├── POST /login                  # Verify credentials, issue token
///     ├── POST /password/forgot        # Issue reset ticket, email the code
///     └── POST /password/reset         # Redeem ticket, set new password
/// ```

use crate::{
    config::Config,
    mail::Mailer,
    middleware::security::SecurityHeadersLayer,
    store::{AccountStore, ResetTicketStore},
};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned per request via Axum's `State` extractor; everything inside
/// is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Account persistence
    pub accounts: Arc<dyn AccountStore>,

    /// Reset-ticket persistence
    pub tickets: Arc<dyn ResetTicketStore>,

    /// Mail transport
    pub mailer: Arc<dyn Mailer>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        tickets: Arc<dyn ResetTicketStore>,
        mailer: Arc<dyn Mailer>,
        config: Config,
    ) -> Self {
        Self {
            accounts,
            tickets,
            mailer,
            config: Arc::new(config),
        }
    }

    /// Gets the JWT secret for token operations
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the complete Axum router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Health check (public, no auth)
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // Authentication workflow (public by nature)
    let auth_routes = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login))
        .route("/password/forgot", post(routes::auth::forgot_password))
        .route("/password/reset", post(routes::auth::reset_password));

    let v1_routes = Router::new().nest("/auth", auth_routes);

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .merge(health_routes)
        .nest("/v1", v1_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .layer(SecurityHeadersLayer::new(state.config.api.production))
        .with_state(state)
}
