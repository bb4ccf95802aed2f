//! Attendance endpoints

use axum::http::StatusCode;
use axum::routing::get;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::attendance::{AttendanceCreate, AttendanceUpdate};
use shared::util::now_millis;

use crate::db;
use crate::db::attendance::Attendance;
use crate::state::AppState;

use super::{ApiResult, internal};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_attendance).post(create_attendance))
        .route("/{id}", get(get_attendance).patch(update_attendance))
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub employee_id: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: Option<i32>,
    pub per_page: Option<i32>,
}

/// GET /api/attendance
pub async fn list_attendance(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<Attendance>> {
    let per_page = query.per_page.unwrap_or(20).min(100);
    let page = query.page.unwrap_or(1).max(1);
    let offset = (page - 1) * per_page;

    let records = db::attendance::list(
        &state.pool,
        query.employee_id.as_deref(),
        query.start_date,
        query.end_date,
        per_page,
        offset,
    )
    .await
    .map_err(internal)?;

    Ok(Json(records))
}

/// POST /api/attendance
pub async fn create_attendance(
    State(state): State<AppState>,
    Json(data): Json<AttendanceCreate>,
) -> Result<(StatusCode, Json<Attendance>), AppError> {
    if db::employees::find_by_id(&state.pool, &data.employee_id)
        .await
        .map_err(internal)?
        .is_none()
    {
        return Err(AppError::new(ErrorCode::EmployeeNotFound));
    }

    // One live record per employee per day
    if db::attendance::find_by_employee_and_date(&state.pool, &data.employee_id, data.attendance_date)
        .await
        .map_err(internal)?
        .is_some()
    {
        return Err(AppError::new(ErrorCode::AttendanceDateExists));
    }

    let record = db::attendance::create(&state.pool, &data, now_millis())
        .await
        .map_err(internal)?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/attendance/{id}
pub async fn get_attendance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Attendance> {
    let record = db::attendance::find_by_id(&state.pool, &id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::AttendanceNotFound))?;

    Ok(Json(record))
}

/// PATCH /api/attendance/{id}
pub async fn update_attendance(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<AttendanceUpdate>,
) -> ApiResult<Attendance> {
    let record = db::attendance::update(&state.pool, &id, &data, now_millis())
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::AttendanceNotFound))?;

    Ok(Json(record))
}
