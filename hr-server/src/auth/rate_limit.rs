//! Application-layer rate limiting for the public auth routes
//!
//! Fixed-window counting per client IP. This throttles request volume
//! only; the persisted account lockout in the login flow is what
//! defends individual accounts.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared::error::{AppError, ErrorCode};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::Instant;

struct WindowEntry {
    count: u32,
    window_start: Instant,
}

/// Per-IP fixed-window counter. One instance per protected route.
#[derive(Clone)]
pub struct RateLimiter {
    max_requests: u32,
    window_secs: u64,
    inner: Arc<Mutex<HashMap<String, WindowEntry>>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs,
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Returns `true` if the request is allowed, `false` if rate-limited.
    async fn check(&self, ip: &str) -> bool {
        let mut map = self.inner.lock().await;
        let now = Instant::now();

        let entry = map.entry(ip.to_owned()).or_insert_with(|| WindowEntry {
            count: 0,
            window_start: now,
        });

        // Reset window if expired
        if now.duration_since(entry.window_start).as_secs() >= self.window_secs {
            entry.count = 0;
            entry.window_start = now;
        }

        entry.count += 1;
        entry.count <= self.max_requests
    }

    /// Remove entries whose window closed more than 5 minutes ago
    pub async fn cleanup(&self) {
        let mut map = self.inner.lock().await;
        let cutoff = std::time::Duration::from_secs(300);
        let now = Instant::now();

        map.retain(|_, entry| now.duration_since(entry.window_start) < cutoff);
    }
}

/// Extract client IP: X-Forwarded-For header first (reverse proxy), then peer address.
fn extract_ip(request: &Request) -> String {
    if let Some(forwarded) = request.headers().get("x-forwarded-for")
        && let Ok(val) = forwarded.to_str()
    {
        // X-Forwarded-For can be comma-separated; first entry is the original client
        if let Some(first) = val.split(',').next() {
            let ip = first.trim();
            if !ip.is_empty() {
                return ip.to_owned();
            }
        }
    }

    // Fallback: peer address from extensions (ConnectInfo)
    request
        .extensions()
        .get::<axum::extract::ConnectInfo<std::net::SocketAddr>>()
        .map(|ci| ci.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_owned())
}

fn too_many_requests() -> Response {
    AppError::new(ErrorCode::TooManyRequests).into_response()
}

/// Rate limit middleware for the login route
pub async fn login_rate_limit(
    State(state): State<crate::state::AppState>,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    let ip = extract_ip(&request);
    if !state.login_limiter.check(&ip).await {
        return Err(too_many_requests());
    }
    Ok(next.run(request).await)
}

/// Rate limit middleware for the registration route
pub async fn register_rate_limit(
    State(state): State<crate::state::AppState>,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    let ip = extract_ip(&request);
    if !state.register_limiter.check(&ip).await {
        return Err(too_many_requests());
    }
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_allows_up_to_max() {
        let limiter = RateLimiter::new(3, 60);
        assert!(limiter.check("10.0.0.1").await);
        assert!(limiter.check("10.0.0.1").await);
        assert!(limiter.check("10.0.0.1").await);
        assert!(!limiter.check("10.0.0.1").await);
    }

    #[tokio::test]
    async fn test_ips_are_independent() {
        let limiter = RateLimiter::new(1, 60);
        assert!(limiter.check("10.0.0.1").await);
        assert!(!limiter.check("10.0.0.1").await);
        assert!(limiter.check("10.0.0.2").await);
    }

    #[tokio::test]
    async fn test_cleanup_drops_stale_entries() {
        let limiter = RateLimiter::new(1, 60);
        assert!(limiter.check("10.0.0.1").await);
        limiter.cleanup().await;
        // Entry is recent, so it survives and the limit still applies
        assert!(!limiter.check("10.0.0.1").await);
    }
}
