//! Department endpoints

use axum::http::StatusCode;
use axum::routing::get;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::department::{DepartmentCreate, DepartmentUpdate};
use shared::util::now_millis;

use crate::db;
use crate::db::departments::Department;
use crate::state::AppState;

use super::{ApiResult, internal};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_departments).post(create_department))
        .route(
            "/{id}",
            get(get_department)
                .patch(update_department)
                .delete(delete_department),
        )
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub is_active: Option<bool>,
    pub page: Option<i32>,
    pub per_page: Option<i32>,
}

/// GET /api/departments
pub async fn list_departments(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<Department>> {
    let per_page = query.per_page.unwrap_or(20).min(100);
    let page = query.page.unwrap_or(1).max(1);
    let offset = (page - 1) * per_page;

    let departments = db::departments::list(&state.pool, query.is_active, per_page, offset)
        .await
        .map_err(internal)?;

    Ok(Json(departments))
}

/// POST /api/departments
pub async fn create_department(
    State(state): State<AppState>,
    Json(data): Json<DepartmentCreate>,
) -> Result<(StatusCode, Json<Department>), AppError> {
    if db::departments::find_by_name(&state.pool, &data.name)
        .await
        .map_err(internal)?
        .is_some()
    {
        return Err(AppError::new(ErrorCode::DepartmentNameExists));
    }
    if let Some(ref code) = data.code
        && db::departments::find_by_code(&state.pool, code)
            .await
            .map_err(internal)?
            .is_some()
    {
        return Err(AppError::new(ErrorCode::DepartmentCodeExists));
    }

    let department = db::departments::create(&state.pool, &data, now_millis())
        .await
        .map_err(internal)?;

    Ok((StatusCode::CREATED, Json(department)))
}

/// GET /api/departments/{id}
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Department> {
    let department = db::departments::find_by_id(&state.pool, &id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::DepartmentNotFound))?;

    Ok(Json(department))
}

/// PATCH /api/departments/{id}
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<DepartmentUpdate>,
) -> ApiResult<Department> {
    let department = db::departments::update(&state.pool, &id, &data, now_millis())
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::DepartmentNotFound))?;

    Ok(Json(department))
}

/// DELETE /api/departments/{id} — soft delete, no cascade to employees
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let deleted = db::departments::soft_delete(&state.pool, &id, now_millis())
        .await
        .map_err(internal)?;
    if !deleted {
        return Err(AppError::new(ErrorCode::DepartmentNotFound));
    }
    Ok(StatusCode::NO_CONTENT)
}
