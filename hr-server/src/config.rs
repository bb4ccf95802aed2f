//! HR server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration, read once at startup.
///
/// The security thresholds live here rather than as constants so the
/// account lockout policy is built from explicit configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// JWT signing secret for access tokens
    pub jwt_secret: String,
    /// Access token lifetime in hours
    pub token_ttl_hours: i64,
    /// Failed password attempts before the account locks
    pub max_failed_attempts: i32,
    /// Lockout window in minutes
    pub lockout_minutes: i64,
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development environments.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: environment.clone(),
            jwt_secret: Self::require_secret("JWT_SECRET", &environment)?,
            token_ttl_hours: std::env::var("TOKEN_TTL_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8),
            max_failed_attempts: std::env::var("MAX_FAILED_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            lockout_minutes: std::env::var("LOCKOUT_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
        })
    }
}
