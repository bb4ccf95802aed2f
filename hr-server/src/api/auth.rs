//! Authentication endpoints: register, login, me, logout, change-password

use axum::http::StatusCode;
use axum::{Extension, Json, extract::State};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::user::{TokenResponse, UserOut, UserRole};
use shared::util::now_millis;

use crate::auth::CurrentUser;
use crate::auth::jwt;
use crate::auth::policy::AccountState;
use crate::db;
use crate::state::AppState;
use crate::util::{hash_password, verify_password};

use super::{ApiResult, internal};

// ── Request types ──

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

// ── POST /api/auth/register ──

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserOut>), AppError> {
    let email = req.email.trim().to_lowercase();

    // Validate
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::validation("Invalid email"));
    }
    if req.password.len() < 8 {
        return Err(AppError::new(ErrorCode::PasswordTooShort));
    }

    // Email must not belong to a live account
    if db::users::find_by_email(&state.pool, &email)
        .await
        .map_err(internal)?
        .is_some()
    {
        return Err(AppError::new(ErrorCode::EmailAlreadyRegistered));
    }

    let password_hash = hash_password(&req.password).map_err(|e| {
        tracing::error!("Password hash error: {e}");
        AppError::new(ErrorCode::InternalError)
    })?;

    let now = now_millis();
    let user = db::users::create(
        &state.pool,
        &req.name,
        &email,
        &password_hash,
        req.role,
        req.phone.as_deref(),
        now,
    )
    .await
    .map_err(|e| match &e {
        // Concurrent registration of the same email loses the race at
        // the partial unique index
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::new(ErrorCode::EmailAlreadyRegistered)
        }
        _ => internal(e),
    })?;

    tracing::info!(user_id = %user.meta.id, email = %email, "User registered");

    Ok((StatusCode::CREATED, Json(user.public_profile())))
}

// ── POST /api/auth/login ──

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<TokenResponse> {
    let email = req.email.trim().to_lowercase();
    let now = now_millis();

    // The counter read-modify-write must serialize per account: the
    // whole evaluation runs behind a row lock.
    let mut tx = state.pool.begin().await.map_err(internal)?;

    // Missing account and wrong password collapse to the same error so
    // the response does not reveal which emails are registered.
    let user = db::users::find_by_email_for_update(&mut tx, &email)
        .await
        .map_err(internal)?
        .ok_or_else(AppError::invalid_credentials)?;

    // Lockout is checked before the password: a locked account never
    // reaches verification and never advances the counter.
    if let AccountState::Locked { until } =
        AccountState::derive(user.is_active, user.locked_until, now)
    {
        return Err(AppError::new(ErrorCode::AccountLocked).with_detail("locked_until", until));
    }

    if !verify_password(&req.password, &user.password_hash) {
        let outcome = state.policy.on_failed_attempt(user.failed_login_attempts, now);
        db::users::record_login_failure(
            &mut tx,
            &user.meta.id,
            outcome.failed_login_attempts,
            outcome.locked_until,
            now,
        )
        .await
        .map_err(internal)?;
        // The attempt is counted even though the call fails
        tx.commit().await.map_err(internal)?;

        if outcome.locked_until.is_some() {
            tracing::warn!(user_id = %user.meta.id, "Account locked after repeated failures");
        }
        return Err(AppError::invalid_credentials());
    }

    // Deactivation is only reported once the password is known good
    if !user.is_active {
        return Err(AppError::new(ErrorCode::AccountDisabled));
    }

    db::users::record_login_success(&mut tx, &user.meta.id, now)
        .await
        .map_err(internal)?;
    tx.commit().await.map_err(internal)?;

    let role = user.role().ok_or_else(|| {
        tracing::error!(user_id = %user.meta.id, role = %user.role, "Unknown role on user row");
        AppError::new(ErrorCode::InternalError)
    })?;

    let token = jwt::create_token(&user.meta.id, role, &state.jwt_secret, state.policy.token_ttl_ms)
        .map_err(|e| {
            tracing::error!("JWT creation failed: {e}");
            AppError::new(ErrorCode::InternalError)
        })?;

    // Read back so the returned profile carries the fresh last_login
    let user = db::users::find_by_id(&state.pool, &user.meta.id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::InternalError))?;

    tracing::info!(user_id = %user.meta.id, "Login successful");

    Ok(Json(TokenResponse::bearer(token, user.public_profile())))
}

// ── GET /api/auth/me ──

/// Return the currently authenticated user's profile, re-read from the
/// store rather than reconstructed from token claims.
pub async fn me(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> ApiResult<UserOut> {
    let user = db::users::find_by_id(&state.pool, &current.user_id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;

    Ok(Json(user.public_profile()))
}

// ── POST /api/auth/logout ──

/// Tokens are stateless; the client discards its copy and nothing is
/// revoked server-side.
pub async fn logout() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Logged out successfully" }))
}

// ── POST /api/auth/change-password ──

pub async fn change_password(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(req): Json<ChangePasswordRequest>,
) -> ApiResult<serde_json::Value> {
    if req.new_password.len() < 8 {
        return Err(AppError::new(ErrorCode::PasswordTooShort));
    }

    let user = db::users::find_by_id(&state.pool, &current.user_id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;

    if !verify_password(&req.current_password, &user.password_hash) {
        return Err(AppError::invalid_credentials());
    }

    let password_hash = hash_password(&req.new_password).map_err(|e| {
        tracing::error!("Password hash error: {e}");
        AppError::new(ErrorCode::InternalError)
    })?;

    db::users::update_password(&state.pool, &current.user_id, &password_hash, now_millis())
        .await
        .map_err(internal)?;

    tracing::info!(user_id = %current.user_id, "Password changed");

    Ok(Json(serde_json::json!({ "message": "Password changed" })))
}
