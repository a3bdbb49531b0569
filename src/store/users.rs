use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::user::{Credentials, User};

/// Creates a new account with an already-hashed secret.
///
/// Fails with `Conflict` when the email is taken. The pre-check gives the
/// common case a clean error; the unique-violation mapping on the insert
/// covers two registrations racing past the pre-check.
pub async fn create(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, AppError> {
    let existing = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    if existing.is_some() {
        return Err(AppError::Conflict("Email already in use".into()));
    }

    sqlx::query_as::<_, User>(
        "INSERT INTO users (id, name, email, password_hash)
         VALUES ($1, $2, $3, $4)
         RETURNING id, name, email, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Conflict("Email already in use".into())
        }
        other => AppError::from(other),
    })
}

/// Looks up an account by (normalized) email, including the stored hash.
/// Only the login path calls this.
pub async fn find_credentials(
    pool: &PgPool,
    email: &str,
) -> Result<Option<Credentials>, AppError> {
    let credentials = sqlx::query_as::<_, Credentials>(
        "SELECT id, name, email, password_hash FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(credentials)
}

/// Looks up an account by id, public fields only.
pub async fn find_public(pool: &PgPool, id: Uuid) -> Result<Option<User>, AppError> {
    let user =
        sqlx::query_as::<_, User>("SELECT id, name, email, created_at FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(user)
}
