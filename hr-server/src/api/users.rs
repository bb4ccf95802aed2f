//! User management endpoints

use axum::http::StatusCode;
use axum::routing::get;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::user::{UserOut, UserUpdate};
use shared::util::now_millis;

use crate::db;
use crate::state::AppState;

use super::{ApiResult, internal};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route(
            "/{id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub page: Option<i32>,
    pub per_page: Option<i32>,
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<UserOut>> {
    let per_page = query.per_page.unwrap_or(20).min(100);
    let page = query.page.unwrap_or(1).max(1);
    let offset = (page - 1) * per_page;

    let users = db::users::list(&state.pool, per_page, offset)
        .await
        .map_err(internal)?;

    Ok(Json(users.iter().map(|u| u.public_profile()).collect()))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<UserOut> {
    let user = db::users::find_by_id(&state.pool, &id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;

    Ok(Json(user.public_profile()))
}

/// PATCH /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<UserUpdate>,
) -> ApiResult<UserOut> {
    let user = db::users::update(&state.pool, &id, &data, now_millis())
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;

    Ok(Json(user.public_profile()))
}

/// DELETE /api/users/{id} — soft delete; the row stays for audit
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let deleted = db::users::soft_delete(&state.pool, &id, now_millis())
        .await
        .map_err(internal)?;
    if !deleted {
        return Err(AppError::new(ErrorCode::UserNotFound));
    }
    Ok(StatusCode::NO_CONTENT)
}
