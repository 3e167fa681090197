//! # Gatehouse API Server
//!
//! Registration, login, and password-reset service over Postgres and
//! SMTP.
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=postgresql://localhost/gatehouse \
//! JWT_SECRET=$(openssl rand -hex 32) \
//! SMTP_HOST=smtp.example.com \
//! SMTP_USERNAME=mailer@example.com \
//! SMTP_PASSWORD=app-password \
//! cargo run
//! ```

use gatehouse::{
    app::{build_router, AppState},
    config::Config,
    mail::smtp::SmtpMailer,
    store::postgres::PgStore,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gatehouse=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Gatehouse v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    let store = Arc::new(
        PgStore::connect(&config.database.url, config.database.max_connections).await?,
    );
    store.run_migrations().await?;

    let mailer = Arc::new(SmtpMailer::new(&config.smtp)?);

    let bind_address = config.bind_address();
    let state = AppState::new(store.clone(), store, mailer, config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
