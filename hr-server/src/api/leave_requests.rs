//! Leave request endpoints

use axum::http::StatusCode;
use axum::routing::get;
use axum::{
    Extension, Json, Router,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::leave_request::{LeaveRequestCreate, LeaveRequestUpdate, LeaveStatus};
use shared::util::now_millis;

use crate::auth::CurrentUser;
use crate::db;
use crate::db::leave_requests::LeaveRequest;
use crate::state::AppState;

use super::{ApiResult, internal};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_leave_requests).post(create_leave_request))
        .route("/{id}", get(get_leave_request).patch(update_leave_request))
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub employee_id: Option<String>,
    pub status: Option<LeaveStatus>,
    pub page: Option<i32>,
    pub per_page: Option<i32>,
}

/// GET /api/leave-requests
pub async fn list_leave_requests(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<LeaveRequest>> {
    let per_page = query.per_page.unwrap_or(20).min(100);
    let page = query.page.unwrap_or(1).max(1);
    let offset = (page - 1) * per_page;

    let requests = db::leave_requests::list(
        &state.pool,
        query.employee_id.as_deref(),
        query.status,
        per_page,
        offset,
    )
    .await
    .map_err(internal)?;

    Ok(Json(requests))
}

/// POST /api/leave-requests
pub async fn create_leave_request(
    State(state): State<AppState>,
    Json(data): Json<LeaveRequestCreate>,
) -> Result<(StatusCode, Json<LeaveRequest>), AppError> {
    if data.end_date < data.start_date || data.days_count <= Decimal::ZERO {
        return Err(AppError::new(ErrorCode::LeaveDatesInvalid));
    }

    if db::employees::find_by_id(&state.pool, &data.employee_id)
        .await
        .map_err(internal)?
        .is_none()
    {
        return Err(AppError::new(ErrorCode::EmployeeNotFound));
    }

    let request = db::leave_requests::create(&state.pool, &data, now_millis())
        .await
        .map_err(internal)?;

    Ok((StatusCode::CREATED, Json(request)))
}

/// GET /api/leave-requests/{id}
pub async fn get_leave_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<LeaveRequest> {
    let request = db::leave_requests::find_by_id(&state.pool, &id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::LeaveRequestNotFound))?;

    Ok(Json(request))
}

/// PATCH /api/leave-requests/{id} — approve/reject
///
/// A status change stamps the caller as reviewer.
pub async fn update_leave_request(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(data): Json<LeaveRequestUpdate>,
) -> ApiResult<LeaveRequest> {
    let request = db::leave_requests::review(
        &state.pool,
        &id,
        data.status,
        &current.user_id,
        data.rejection_reason.as_deref(),
        now_millis(),
    )
    .await
    .map_err(internal)?
    .ok_or_else(|| AppError::new(ErrorCode::LeaveRequestNotFound))?;

    Ok(Json(request))
}
