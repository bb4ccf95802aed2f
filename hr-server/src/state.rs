//! Application state for hr-server

use sqlx::PgPool;

use crate::auth::policy::SecurityPolicy;
use crate::auth::rate_limit::RateLimiter;
use crate::config::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// JWT signing secret for access tokens
    pub jwt_secret: String,
    /// Lockout thresholds and token lifetime
    pub policy: SecurityPolicy,
    /// Rate limiter for the login route (5 requests/minute per IP)
    pub login_limiter: RateLimiter,
    /// Rate limiter for the registration route (3 requests/minute per IP)
    pub register_limiter: RateLimiter,
}

impl AppState {
    /// Create a new AppState
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self {
            pool,
            jwt_secret: config.jwt_secret.clone(),
            policy: SecurityPolicy::from_config(config),
            login_limiter: RateLimiter::new(5, 60),
            register_limiter: RateLimiter::new(3, 60),
        })
    }
}
