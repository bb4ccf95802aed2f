//! Department database operations

use shared::models::department::{DepartmentCreate, DepartmentUpdate};
use sqlx::PgPool;

use super::entity::EntityMeta;

/// Department row
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct Department {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub name: String,
    pub code: Option<String>,
    pub parent_id: Option<String>,
    pub manager_id: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

pub async fn create(
    pool: &PgPool,
    data: &DepartmentCreate,
    now: i64,
) -> Result<Department, sqlx::Error> {
    let meta = EntityMeta::new(now);
    sqlx::query(
        r#"
        INSERT INTO departments (
            id, created_at, is_deleted, version,
            name, code, parent_id, manager_id, description, is_active
        )
        VALUES ($1, $2, FALSE, 1, $3, $4, $5, $6, $7, TRUE)
        "#,
    )
    .bind(&meta.id)
    .bind(now)
    .bind(&data.name)
    .bind(&data.code)
    .bind(&data.parent_id)
    .bind(&data.manager_id)
    .bind(&data.description)
    .execute(pool)
    .await?;

    Ok(Department {
        meta,
        name: data.name.clone(),
        code: data.code.clone(),
        parent_id: data.parent_id.clone(),
        manager_id: data.manager_id.clone(),
        description: data.description.clone(),
        is_active: true,
    })
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Department>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM departments WHERE id = $1 AND is_deleted = FALSE")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Department>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM departments WHERE name = $1 AND is_deleted = FALSE")
        .bind(name)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Department>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM departments WHERE code = $1 AND is_deleted = FALSE")
        .bind(code)
        .fetch_optional(pool)
        .await
}

pub async fn list(
    pool: &PgPool,
    is_active: Option<bool>,
    per_page: i32,
    offset: i32,
) -> Result<Vec<Department>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT * FROM departments
        WHERE is_deleted = FALSE AND ($1::boolean IS NULL OR is_active = $1)
        ORDER BY created_at
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(is_active)
    .bind(per_page)
    .bind(offset)
    .fetch_all(pool)
    .await
}

/// Apply a partial update and read back the row
pub async fn update(
    pool: &PgPool,
    id: &str,
    data: &DepartmentUpdate,
    now: i64,
) -> Result<Option<Department>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        UPDATE departments SET
            name = COALESCE($1, name),
            code = COALESCE($2, code),
            parent_id = COALESCE($3, parent_id),
            manager_id = COALESCE($4, manager_id),
            description = COALESCE($5, description),
            is_active = COALESCE($6, is_active),
            updated_at = $7,
            version = version + 1
        WHERE id = $8 AND is_deleted = FALSE
        "#,
    )
    .bind(data.name.as_deref())
    .bind(data.code.as_deref())
    .bind(data.parent_id.as_deref())
    .bind(data.manager_id.as_deref())
    .bind(data.description.as_deref())
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    let department: Option<Department> =
        sqlx::query_as("SELECT * FROM departments WHERE id = $1 AND is_deleted = FALSE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

    tx.commit().await?;
    Ok(department)
}

/// Soft-delete transition. Child employees are left untouched.
pub async fn soft_delete(pool: &PgPool, id: &str, now: i64) -> Result<bool, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        UPDATE departments SET
            is_deleted = TRUE,
            deleted_at = $1,
            updated_at = $1,
            version = version + 1
        WHERE id = $2 AND is_deleted = FALSE
        "#,
    )
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
