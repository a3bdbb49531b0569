use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::todo::{Todo, TodoInput, TodoPage, TodoStatus};

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 10;

/// Clamps page/limit to usable values: absent or non-positive fall back to
/// the defaults (1, 10).
fn normalize_paging(page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let page = page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
    let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT);
    (page, limit)
}

/// `ceil(total / limit)`, but never below 1 — an empty collection still has
/// one (empty) page.
fn total_pages(total: i64, limit: i64) -> i64 {
    ((total + limit - 1) / limit).max(1)
}

/// Inserts a new todo for the given owner. Status always starts `pending`.
pub async fn create(pool: &PgPool, owner: Uuid, input: TodoInput) -> Result<Todo, AppError> {
    let todo = sqlx::query_as::<_, Todo>(
        "INSERT INTO todos (id, title, description, status, user_id)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, title, description, status, user_id, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(input.title)
    .bind(input.description)
    .bind(TodoStatus::Pending)
    .bind(owner)
    .fetch_one(pool)
    .await?;

    Ok(todo)
}

/// Returns one page of the owner's todos, most recently created first.
///
/// Offset pagination (`skip = (page - 1) * limit`): page boundaries are not
/// snapshot-stable under concurrent writes, matching the documented weak
/// consistency of the listing contract.
pub async fn list(
    pool: &PgPool,
    owner: Uuid,
    page: Option<i64>,
    limit: Option<i64>,
) -> Result<TodoPage, AppError> {
    let (page, limit) = normalize_paging(page, limit);
    let skip = (page - 1) * limit;

    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM todos WHERE user_id = $1")
        .bind(owner)
        .fetch_one(pool)
        .await?;

    let data = sqlx::query_as::<_, Todo>(
        "SELECT id, title, description, status, user_id, created_at
         FROM todos WHERE user_id = $1
         ORDER BY created_at DESC
         LIMIT $2 OFFSET $3",
    )
    .bind(owner)
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await?;

    Ok(TodoPage {
        page,
        limit,
        total,
        total_pages: total_pages(total, limit),
        data,
    })
}

/// Transitions a todo's status in one atomic conditional update.
///
/// The predicate carries both the id and the owner, so a todo owned by
/// someone else behaves exactly like a missing one (`None`), and there is no
/// fetch-then-write window between two requests from the same account.
pub async fn set_status(
    pool: &PgPool,
    owner: Uuid,
    id: Uuid,
    status: TodoStatus,
) -> Result<Option<Todo>, AppError> {
    let todo = sqlx::query_as::<_, Todo>(
        "UPDATE todos SET status = $1
         WHERE id = $2 AND user_id = $3
         RETURNING id, title, description, status, user_id, created_at",
    )
    .bind(status)
    .bind(id)
    .bind(owner)
    .fetch_optional(pool)
    .await?;

    Ok(todo)
}

/// Deletes a todo, scoped by owner. Returns whether a row was removed;
/// repeating the call keeps returning `false`.
pub async fn delete(pool: &PgPool, owner: Uuid, id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(owner)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_paging() {
        assert_eq!(normalize_paging(None, None), (1, 10));
        assert_eq!(normalize_paging(Some(3), Some(25)), (3, 25));
        // Non-positive values fall back to defaults, they do not error.
        assert_eq!(normalize_paging(Some(0), Some(0)), (1, 10));
        assert_eq!(normalize_paging(Some(-2), Some(-5)), (1, 10));
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }
}
