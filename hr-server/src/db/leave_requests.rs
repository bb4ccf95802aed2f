//! Leave request database operations

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::leave_request::{LeaveRequestCreate, LeaveStatus};
use sqlx::PgPool;

use super::entity::EntityMeta;

/// Leave request row
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct LeaveRequest {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub employee_id: String,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_count: Decimal,
    pub reason: Option<String>,
    pub status: String,
    pub approved_by: Option<String>,
    pub approved_at: Option<i64>,
    pub rejection_reason: Option<String>,
}

pub async fn create(
    pool: &PgPool,
    data: &LeaveRequestCreate,
    now: i64,
) -> Result<LeaveRequest, sqlx::Error> {
    let meta = EntityMeta::new(now);
    sqlx::query(
        r#"
        INSERT INTO leave_requests (
            id, created_at, is_deleted, version,
            employee_id, leave_type, start_date, end_date,
            days_count, reason, status
        )
        VALUES ($1, $2, FALSE, 1, $3, $4, $5, $6, $7, $8, 'pending')
        "#,
    )
    .bind(&meta.id)
    .bind(now)
    .bind(&data.employee_id)
    .bind(&data.leave_type)
    .bind(data.start_date)
    .bind(data.end_date)
    .bind(data.days_count)
    .bind(&data.reason)
    .execute(pool)
    .await?;

    Ok(LeaveRequest {
        meta,
        employee_id: data.employee_id.clone(),
        leave_type: data.leave_type.clone(),
        start_date: data.start_date,
        end_date: data.end_date,
        days_count: data.days_count,
        reason: data.reason.clone(),
        status: LeaveStatus::Pending.as_str().to_string(),
        approved_by: None,
        approved_at: None,
        rejection_reason: None,
    })
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<LeaveRequest>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM leave_requests WHERE id = $1 AND is_deleted = FALSE")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(
    pool: &PgPool,
    employee_id: Option<&str>,
    status: Option<LeaveStatus>,
    per_page: i32,
    offset: i32,
) -> Result<Vec<LeaveRequest>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT * FROM leave_requests
        WHERE is_deleted = FALSE
          AND ($1::text IS NULL OR employee_id = $1)
          AND ($2::text IS NULL OR status = $2)
        ORDER BY created_at DESC
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(employee_id)
    .bind(status.map(|s| s.as_str()))
    .bind(per_page)
    .bind(offset)
    .fetch_all(pool)
    .await
}

/// Review update: a status change stamps the approver and decision
/// time; an absent status leaves both untouched.
pub async fn review(
    pool: &PgPool,
    id: &str,
    status: Option<LeaveStatus>,
    reviewer_id: &str,
    rejection_reason: Option<&str>,
    now: i64,
) -> Result<Option<LeaveRequest>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        UPDATE leave_requests SET
            status = COALESCE($1, status),
            approved_by = CASE WHEN $1::text IS NULL THEN approved_by ELSE $2 END,
            approved_at = CASE WHEN $1::text IS NULL THEN approved_at ELSE $3 END,
            rejection_reason = COALESCE($4, rejection_reason),
            updated_at = $3,
            version = version + 1
        WHERE id = $5 AND is_deleted = FALSE
        "#,
    )
    .bind(status.map(|s| s.as_str()))
    .bind(reviewer_id)
    .bind(now)
    .bind(rejection_reason)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    let request: Option<LeaveRequest> =
        sqlx::query_as("SELECT * FROM leave_requests WHERE id = $1 AND is_deleted = FALSE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

    tx.commit().await?;
    Ok(request)
}
