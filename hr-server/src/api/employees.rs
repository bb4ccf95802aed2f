//! Employee endpoints

use axum::http::StatusCode;
use axum::routing::get;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::employee::{EmployeeCreate, EmployeeUpdate};
use shared::util::now_millis;

use crate::db;
use crate::db::employees::Employee;
use crate::state::AppState;

use super::{ApiResult, internal};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/{id}",
            get(get_employee)
                .patch(update_employee)
                .delete(delete_employee),
        )
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub department_id: Option<String>,
    pub is_active: Option<bool>,
    pub page: Option<i32>,
    pub per_page: Option<i32>,
}

/// GET /api/employees
pub async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<Employee>> {
    let per_page = query.per_page.unwrap_or(20).min(100);
    let page = query.page.unwrap_or(1).max(1);
    let offset = (page - 1) * per_page;

    let employees = db::employees::list(
        &state.pool,
        query.department_id.as_deref(),
        query.is_active,
        per_page,
        offset,
    )
    .await
    .map_err(internal)?;

    Ok(Json(employees))
}

/// POST /api/employees
pub async fn create_employee(
    State(state): State<AppState>,
    Json(data): Json<EmployeeCreate>,
) -> Result<(StatusCode, Json<Employee>), AppError> {
    // The linked user account must exist (and not be soft-deleted)
    if db::users::find_by_id(&state.pool, &data.user_id)
        .await
        .map_err(internal)?
        .is_none()
    {
        return Err(AppError::new(ErrorCode::UserNotFound));
    }

    if db::employees::find_by_number(&state.pool, &data.employee_number)
        .await
        .map_err(internal)?
        .is_some()
    {
        return Err(AppError::new(ErrorCode::EmployeeNumberExists));
    }
    if db::employees::find_by_user(&state.pool, &data.user_id)
        .await
        .map_err(internal)?
        .is_some()
    {
        return Err(AppError::new(ErrorCode::EmployeeUserExists));
    }

    let employee = db::employees::create(&state.pool, &data, now_millis())
        .await
        .map_err(internal)?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/employees/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Employee> {
    let employee = db::employees::find_by_id(&state.pool, &id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;

    Ok(Json(employee))
}

/// PATCH /api/employees/{id}
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<EmployeeUpdate>,
) -> ApiResult<Employee> {
    let employee = db::employees::update(&state.pool, &id, &data, now_millis())
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;

    Ok(Json(employee))
}

/// DELETE /api/employees/{id} — soft delete; attendance/leave rows stay live
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let deleted = db::employees::soft_delete(&state.pool, &id, now_millis())
        .await
        .map_err(internal)?;
    if !deleted {
        return Err(AppError::new(ErrorCode::EmployeeNotFound));
    }
    Ok(StatusCode::NO_CONTENT)
}
