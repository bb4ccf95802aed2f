//! hr-server — HR/ERP backend service
//!
//! Long-running service that:
//! - Manages user accounts (registration, login with lockout, JWT)
//! - Serves HR records: departments, employees, attendance, leave requests
//! - Soft-deletes everything; rows are kept for audit

mod api;
mod auth;
mod config;
mod db;
mod state;
mod util;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hr_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting hr-server (env: {})", config.environment);

    // Initialize application state
    let state = AppState::new(&config).await?;

    // Build router
    let app = api::create_router(state.clone());

    // Periodic rate limiter cleanup (every 5 minutes)
    let login_limiter = state.login_limiter.clone();
    let register_limiter = state.register_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(300));
        loop {
            interval.tick().await;
            login_limiter.cleanup().await;
            register_limiter.cleanup().await;
        }
    });

    // Start HTTP server
    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("hr-server HTTP listening on {http_addr}");

    axum::serve(http_listener, app).await?;

    Ok(())
}
