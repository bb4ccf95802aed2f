//! Employee database operations

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::employee::{EmployeeCreate, EmployeeUpdate, EmploymentType};
use sqlx::PgPool;

use super::entity::EntityMeta;

/// Employee HR record row, linked to a user account
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct Employee {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub user_id: String,
    pub employee_number: String,
    pub department_id: Option<String>,
    pub job_title: Option<String>,
    pub employment_type: String,
    pub joining_date: NaiveDate,
    pub confirmation_date: Option<NaiveDate>,
    pub resignation_date: Option<NaiveDate>,
    pub last_working_date: Option<NaiveDate>,
    pub manager_id: Option<String>,
    pub current_salary: Option<Decimal>,
    pub currency: String,
    pub annual_leave_balance: Decimal,
    pub sick_leave_balance: Decimal,
    pub casual_leave_balance: Decimal,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub emergency_contact_relation: Option<String>,
    pub current_address: Option<String>,
    pub permanent_address: Option<String>,
    pub documents: serde_json::Value,
    pub is_active: bool,
}

pub async fn create(
    pool: &PgPool,
    data: &EmployeeCreate,
    now: i64,
) -> Result<Employee, sqlx::Error> {
    let meta = EntityMeta::new(now);
    let employment_type = data.employment_type.unwrap_or(EmploymentType::FullTime);
    let currency = data.currency.as_deref().unwrap_or("INR");

    sqlx::query(
        r#"
        INSERT INTO employees (
            id, created_at, is_deleted, version,
            user_id, employee_number, department_id, job_title,
            employment_type, joining_date, manager_id,
            current_salary, currency,
            annual_leave_balance, sick_leave_balance, casual_leave_balance,
            emergency_contact_name, emergency_contact_phone, emergency_contact_relation,
            current_address, permanent_address, documents, is_active
        )
        VALUES ($1, $2, FALSE, 1, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                0, 0, 0, $12, $13, $14, $15, $16, '[]'::jsonb, TRUE)
        "#,
    )
    .bind(&meta.id)
    .bind(now)
    .bind(&data.user_id)
    .bind(&data.employee_number)
    .bind(&data.department_id)
    .bind(&data.job_title)
    .bind(employment_type.as_str())
    .bind(data.joining_date)
    .bind(&data.manager_id)
    .bind(data.current_salary)
    .bind(currency)
    .bind(&data.emergency_contact_name)
    .bind(&data.emergency_contact_phone)
    .bind(&data.emergency_contact_relation)
    .bind(&data.current_address)
    .bind(&data.permanent_address)
    .execute(pool)
    .await?;

    Ok(Employee {
        meta,
        user_id: data.user_id.clone(),
        employee_number: data.employee_number.clone(),
        department_id: data.department_id.clone(),
        job_title: data.job_title.clone(),
        employment_type: employment_type.as_str().to_string(),
        joining_date: data.joining_date,
        confirmation_date: None,
        resignation_date: None,
        last_working_date: None,
        manager_id: data.manager_id.clone(),
        current_salary: data.current_salary,
        currency: currency.to_string(),
        annual_leave_balance: Decimal::ZERO,
        sick_leave_balance: Decimal::ZERO,
        casual_leave_balance: Decimal::ZERO,
        emergency_contact_name: data.emergency_contact_name.clone(),
        emergency_contact_phone: data.emergency_contact_phone.clone(),
        emergency_contact_relation: data.emergency_contact_relation.clone(),
        current_address: data.current_address.clone(),
        permanent_address: data.permanent_address.clone(),
        documents: serde_json::json!([]),
        is_active: true,
    })
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM employees WHERE id = $1 AND is_deleted = FALSE")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_number(
    pool: &PgPool,
    employee_number: &str,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM employees WHERE employee_number = $1 AND is_deleted = FALSE")
        .bind(employee_number)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_user(pool: &PgPool, user_id: &str) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM employees WHERE user_id = $1 AND is_deleted = FALSE")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn list(
    pool: &PgPool,
    department_id: Option<&str>,
    is_active: Option<bool>,
    per_page: i32,
    offset: i32,
) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT * FROM employees
        WHERE is_deleted = FALSE
          AND ($1::text IS NULL OR department_id = $1)
          AND ($2::boolean IS NULL OR is_active = $2)
        ORDER BY created_at
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(department_id)
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
    data: &EmployeeUpdate,
    now: i64,
) -> Result<Option<Employee>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        UPDATE employees SET
            department_id = COALESCE($1, department_id),
            job_title = COALESCE($2, job_title),
            employment_type = COALESCE($3, employment_type),
            manager_id = COALESCE($4, manager_id),
            current_salary = COALESCE($5, current_salary),
            annual_leave_balance = COALESCE($6, annual_leave_balance),
            sick_leave_balance = COALESCE($7, sick_leave_balance),
            casual_leave_balance = COALESCE($8, casual_leave_balance),
            current_address = COALESCE($9, current_address),
            permanent_address = COALESCE($10, permanent_address),
            is_active = COALESCE($11, is_active),
            resignation_date = COALESCE($12, resignation_date),
            last_working_date = COALESCE($13, last_working_date),
            updated_at = $14,
            version = version + 1
        WHERE id = $15 AND is_deleted = FALSE
        "#,
    )
    .bind(data.department_id.as_deref())
    .bind(data.job_title.as_deref())
    .bind(data.employment_type.map(|t| t.as_str()))
    .bind(data.manager_id.as_deref())
    .bind(data.current_salary)
    .bind(data.annual_leave_balance)
    .bind(data.sick_leave_balance)
    .bind(data.casual_leave_balance)
    .bind(data.current_address.as_deref())
    .bind(data.permanent_address.as_deref())
    .bind(data.is_active)
    .bind(data.resignation_date)
    .bind(data.last_working_date)
    .bind(now)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    let employee: Option<Employee> =
        sqlx::query_as("SELECT * FROM employees WHERE id = $1 AND is_deleted = FALSE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

    tx.commit().await?;
    Ok(employee)
}

/// Soft-delete transition. Attendance and leave rows are left untouched.
pub async fn soft_delete(pool: &PgPool, id: &str, now: i64) -> Result<bool, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        UPDATE employees SET
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
