//! Attendance database operations

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::attendance::{AttendanceCreate, AttendanceUpdate};
use sqlx::PgPool;

use super::entity::EntityMeta;

/// Daily attendance row with check-in/check-out
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct Attendance {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub employee_id: String,
    pub attendance_date: NaiveDate,
    pub check_in: Option<i64>,
    pub check_out: Option<i64>,
    pub worked_hours: Option<Decimal>,
    pub overtime_hours: Decimal,
    pub is_present: bool,
    pub is_late: bool,
    pub is_half_day: bool,
    pub notes: Option<String>,
}

pub async fn create(
    pool: &PgPool,
    data: &AttendanceCreate,
    now: i64,
) -> Result<Attendance, sqlx::Error> {
    let meta = EntityMeta::new(now);
    sqlx::query(
        r#"
        INSERT INTO attendances (
            id, created_at, is_deleted, version,
            employee_id, attendance_date, check_in, check_out,
            overtime_hours, is_present, is_late, is_half_day, notes
        )
        VALUES ($1, $2, FALSE, 1, $3, $4, $5, $6, 0, $7, $8, $9, $10)
        "#,
    )
    .bind(&meta.id)
    .bind(now)
    .bind(&data.employee_id)
    .bind(data.attendance_date)
    .bind(data.check_in)
    .bind(data.check_out)
    .bind(data.is_present)
    .bind(data.is_late)
    .bind(data.is_half_day)
    .bind(&data.notes)
    .execute(pool)
    .await?;

    Ok(Attendance {
        meta,
        employee_id: data.employee_id.clone(),
        attendance_date: data.attendance_date,
        check_in: data.check_in,
        check_out: data.check_out,
        worked_hours: None,
        overtime_hours: Decimal::ZERO,
        is_present: data.is_present,
        is_late: data.is_late,
        is_half_day: data.is_half_day,
        notes: data.notes.clone(),
    })
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Attendance>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM attendances WHERE id = $1 AND is_deleted = FALSE")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// One live record per employee per day
pub async fn find_by_employee_and_date(
    pool: &PgPool,
    employee_id: &str,
    attendance_date: NaiveDate,
) -> Result<Option<Attendance>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT * FROM attendances
        WHERE employee_id = $1 AND attendance_date = $2 AND is_deleted = FALSE
        "#,
    )
    .bind(employee_id)
    .bind(attendance_date)
    .fetch_optional(pool)
    .await
}

pub async fn list(
    pool: &PgPool,
    employee_id: Option<&str>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    per_page: i32,
    offset: i32,
) -> Result<Vec<Attendance>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT * FROM attendances
        WHERE is_deleted = FALSE
          AND ($1::text IS NULL OR employee_id = $1)
          AND ($2::date IS NULL OR attendance_date >= $2)
          AND ($3::date IS NULL OR attendance_date <= $3)
        ORDER BY attendance_date DESC
        LIMIT $4 OFFSET $5
        "#,
    )
    .bind(employee_id)
    .bind(start_date)
    .bind(end_date)
    .bind(per_page)
    .bind(offset)
    .fetch_all(pool)
    .await
}

/// Apply a partial update and read back the row
pub async fn update(
    pool: &PgPool,
    id: &str,
    data: &AttendanceUpdate,
    now: i64,
) -> Result<Option<Attendance>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        UPDATE attendances SET
            check_in = COALESCE($1, check_in),
            check_out = COALESCE($2, check_out),
            worked_hours = COALESCE($3, worked_hours),
            overtime_hours = COALESCE($4, overtime_hours),
            is_present = COALESCE($5, is_present),
            is_late = COALESCE($6, is_late),
            is_half_day = COALESCE($7, is_half_day),
            notes = COALESCE($8, notes),
            updated_at = $9,
            version = version + 1
        WHERE id = $10 AND is_deleted = FALSE
        "#,
    )
    .bind(data.check_in)
    .bind(data.check_out)
    .bind(data.worked_hours)
    .bind(data.overtime_hours)
    .bind(data.is_present)
    .bind(data.is_late)
    .bind(data.is_half_day)
    .bind(data.notes.as_deref())
    .bind(now)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    let attendance: Option<Attendance> =
        sqlx::query_as("SELECT * FROM attendances WHERE id = $1 AND is_deleted = FALSE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

    tx.commit().await?;
    Ok(attendance)
}
