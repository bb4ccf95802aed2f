//! Bearer authentication middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::error::{AppError, ErrorCode};
use shared::models::user::UserRole;

use crate::db;
use crate::state::AppState;

/// Authenticated caller identity, injected into request extensions
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: String,
    pub email: String,
    pub role: UserRole,
}

/// Extracts and verifies the bearer token, then re-checks the live
/// account state.
///
/// A cryptographically valid token is not enough: the subject must
/// still exist (non-deleted) and be active, so a deactivated or
/// soft-deleted user is cut off immediately even with an unexpired
/// token in hand.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(AppError::unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::invalid_token("Invalid Authorization format"))?;

    let claims = super::jwt::decode_token(token, &state.jwt_secret)?;

    let user = db::users::find_by_id(&state.pool, &claims.sub)
        .await
        .map_err(|e| {
            tracing::error!("User lookup failed during auth: {e}");
            AppError::new(ErrorCode::InternalError)
        })?
        .ok_or_else(|| AppError::new(ErrorCode::TokenInvalid))?;

    if !user.is_active {
        return Err(AppError::new(ErrorCode::TokenInvalid));
    }

    let role = user.role().ok_or_else(|| {
        tracing::error!(user_id = %user.meta.id, role = %user.role, "Unknown role on user row");
        AppError::new(ErrorCode::InternalError)
    })?;

    let identity = CurrentUser {
        user_id: user.meta.id,
        email: user.email,
        role,
    };

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
