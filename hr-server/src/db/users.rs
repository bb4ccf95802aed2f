//! User account database operations

use shared::models::user::{UserOut, UserRole, UserUpdate};
use sqlx::{PgPool, Postgres, Transaction};

use super::entity::EntityMeta;

/// User account row
///
/// Not serialized directly: responses go through [`User::public_profile`]
/// so the password hash never reaches the wire.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    #[sqlx(flatten)]
    pub meta: EntityMeta,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub is_superuser: bool,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub avatar_url: Option<String>,
    pub language: String,
    pub timezone: String,
    pub last_login: Option<i64>,
    pub failed_login_attempts: i32,
    pub locked_until: Option<i64>,
    pub password_changed_at: Option<i64>,
    pub preferences: serde_json::Value,
}

impl User {
    pub fn role(&self) -> Option<UserRole> {
        UserRole::from_db(&self.role)
    }

    pub fn public_profile(&self) -> UserOut {
        UserOut {
            id: self.meta.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role().unwrap_or(UserRole::Employee),
            is_active: self.is_active,
            is_superuser: self.is_superuser,
            phone: self.phone.clone(),
            mobile: self.mobile.clone(),
            avatar_url: self.avatar_url.clone(),
            language: self.language.clone(),
            timezone: self.timezone.clone(),
            last_login: self.last_login,
            created_at: self.meta.created_at,
            updated_at: self.meta.updated_at,
        }
    }
}

pub async fn create(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
    role: UserRole,
    phone: Option<&str>,
    now: i64,
) -> Result<User, sqlx::Error> {
    let meta = EntityMeta::new(now);
    sqlx::query(
        r#"
        INSERT INTO users (
            id, created_at, is_deleted, version,
            name, email, password_hash, role, is_active, is_superuser,
            phone, language, timezone, failed_login_attempts,
            password_changed_at, preferences
        )
        VALUES ($1, $2, FALSE, 1, $3, $4, $5, $6, TRUE, FALSE,
                $7, 'en', 'UTC', 0, $8, '{}'::jsonb)
        "#,
    )
    .bind(&meta.id)
    .bind(now)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role.as_str())
    .bind(phone)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(User {
        meta,
        name: name.to_string(),
        email: email.to_string(),
        password_hash: password_hash.to_string(),
        role: role.as_str().to_string(),
        is_active: true,
        is_superuser: false,
        phone: phone.map(String::from),
        mobile: None,
        avatar_url: None,
        language: "en".to_string(),
        timezone: "UTC".to_string(),
        last_login: None,
        failed_login_attempts: 0,
        locked_until: None,
        password_changed_at: Some(now),
        preferences: serde_json::json!({}),
    })
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE email = $1 AND is_deleted = FALSE")
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Like [`find_by_email`], but takes a row lock for the rest of the
/// transaction. The login flow uses this so concurrent attempts on the
/// same account serialize their counter updates.
pub async fn find_by_email_for_update(
    tx: &mut Transaction<'_, Postgres>,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE email = $1 AND is_deleted = FALSE FOR UPDATE")
        .bind(email)
        .fetch_optional(&mut **tx)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE id = $1 AND is_deleted = FALSE")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool, per_page: i32, offset: i32) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM users WHERE is_deleted = FALSE ORDER BY created_at LIMIT $1 OFFSET $2",
    )
    .bind(per_page)
    .bind(offset)
    .fetch_all(pool)
    .await
}

/// Persist the outcome of a failed password attempt (counter and/or lock)
pub async fn record_login_failure(
    tx: &mut Transaction<'_, Postgres>,
    id: &str,
    failed_login_attempts: i32,
    locked_until: Option<i64>,
    now: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users SET
            failed_login_attempts = $1,
            locked_until = $2,
            updated_at = $3,
            version = version + 1
        WHERE id = $4
        "#,
    )
    .bind(failed_login_attempts)
    .bind(locked_until)
    .bind(now)
    .bind(id)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

/// Reset the failure counter, clear any lock, and stamp last_login
pub async fn record_login_success(
    tx: &mut Transaction<'_, Postgres>,
    id: &str,
    now: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users SET
            failed_login_attempts = 0,
            locked_until = NULL,
            last_login = $1,
            updated_at = $1,
            version = version + 1
        WHERE id = $2
        "#,
    )
    .bind(now)
    .bind(id)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

pub async fn update_password(
    pool: &PgPool,
    id: &str,
    password_hash: &str,
    now: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users SET
            password_hash = $1,
            password_changed_at = $2,
            updated_at = $2,
            version = version + 1
        WHERE id = $3 AND is_deleted = FALSE
        "#,
    )
    .bind(password_hash)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Apply a partial profile update and read back the row
pub async fn update(
    pool: &PgPool,
    id: &str,
    data: &UserUpdate,
    now: i64,
) -> Result<Option<User>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        UPDATE users SET
            name = COALESCE($1, name),
            role = COALESCE($2, role),
            phone = COALESCE($3, phone),
            mobile = COALESCE($4, mobile),
            avatar_url = COALESCE($5, avatar_url),
            language = COALESCE($6, language),
            timezone = COALESCE($7, timezone),
            is_active = COALESCE($8, is_active),
            updated_at = $9,
            version = version + 1
        WHERE id = $10 AND is_deleted = FALSE
        "#,
    )
    .bind(data.name.as_deref())
    .bind(data.role.map(|r| r.as_str()))
    .bind(data.phone.as_deref())
    .bind(data.mobile.as_deref())
    .bind(data.avatar_url.as_deref())
    .bind(data.language.as_deref())
    .bind(data.timezone.as_deref())
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    let user: Option<User> =
        sqlx::query_as("SELECT * FROM users WHERE id = $1 AND is_deleted = FALSE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

    tx.commit().await?;
    Ok(user)
}

/// Soft-delete transition. Returns `false` when no live row matched.
pub async fn soft_delete(pool: &PgPool, id: &str, now: i64) -> Result<bool, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        UPDATE users SET
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
