//! API routes for hr-server

pub mod attendance;
pub mod auth;
pub mod departments;
pub mod employees;
pub mod health;
pub mod leave_requests;
pub mod users;

use axum::routing::{get, post};
use axum::{Router, middleware};
use shared::error::{AppError, ErrorCode};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::middleware::require_auth;
use crate::auth::rate_limit::{login_rate_limit, register_rate_limit};
use crate::state::AppState;

pub type ApiResult<T> = Result<axum::Json<T>, AppError>;

/// Collapse an internal failure to an opaque error after logging it
pub(crate) fn internal<E: std::fmt::Display>(err: E) -> AppError {
    tracing::error!("Internal error: {err}");
    AppError::new(ErrorCode::InternalError)
}

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // Public auth routes (rate limited per IP)
    let register = Router::new()
        .route("/api/auth/register", post(auth::register))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            register_rate_limit,
        ));
    let login = Router::new()
        .route("/api/auth/login", post(auth::login))
        .layer(middleware::from_fn_with_state(state.clone(), login_rate_limit));

    // Everything else requires a valid bearer token for a live account
    let protected = Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/change-password", post(auth::change_password))
        .nest("/api/users", users::router())
        .nest("/api/departments", departments::router())
        .nest("/api/employees", employees::router())
        .nest("/api/attendance", attendance::router())
        .nest("/api/leave-requests", leave_requests::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(register)
        .merge(login)
        .merge(protected)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
