//! User directory: registration, profiles, farmer search.

use crate::error::AppError;
use crate::models::{Role, User};
use crate::service::validation;
use sqlx::SqlitePool;

/// Register a new user. The phone number is the natural key: a duplicate
/// registration fails with `Conflict` rather than silently returning the
/// existing record.
pub async fn register(
    pool: &SqlitePool,
    full_name: &str,
    phone_number: &str,
    role: Role,
    location_district: &str,
    company_name: Option<&str>,
) -> Result<User, AppError> {
    validation::check_not_empty("full_name", full_name)?;
    validation::check_not_empty("location_district", location_district)?;
    validation::check_phone(phone_number)?;

    let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE phone_number = $1")
        .bind(phone_number)
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(format!(
            "phone number already registered: {}",
            phone_number
        )));
    }

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (full_name, phone_number, role, location_district, company_name, is_active, is_verified) \
         VALUES ($1, $2, $3, $4, $5, 1, 0) RETURNING *",
    )
    .bind(full_name)
    .bind(phone_number)
    .bind(role)
    .bind(location_district)
    .bind(company_name)
    .fetch_one(pool)
    .await
    .map_err(|e| match &e {
        // Lost the race against a concurrent registration with the same phone.
        sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Conflict(format!(
            "phone number already registered: {}",
            phone_number
        )),
        _ => AppError::Db(e),
    })?;

    tracing::info!(user_id = user.id, "registered user");
    Ok(user)
}

/// Fetch one user by id.
pub async fn get_profile(pool: &SqlitePool, user_id: i64) -> Result<User, AppError> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user not found: {}", user_id)))
}

/// Farmers whose district contains the given text, case-insensitively.
pub async fn find_farmers_by_district(
    pool: &SqlitePool,
    district: &str,
) -> Result<Vec<User>, AppError> {
    let farmers = sqlx::query_as::<_, User>(
        "SELECT * FROM users \
         WHERE role = $1 AND lower(location_district) LIKE '%' || lower($2) || '%' \
         ORDER BY id",
    )
    .bind(Role::Farmer)
    .bind(district)
    .fetch_all(pool)
    .await?;
    Ok(farmers)
}

/// Guard for operations that reference a user by foreign key.
pub async fn ensure_user_exists(pool: &SqlitePool, user_id: i64) -> Result<(), AppError> {
    let found = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    match found {
        Some(_) => Ok(()),
        None => Err(AppError::NotFound(format!("user not found: {}", user_id))),
    }
}
