use crate::{
    auth::CurrentUser,
    error::AppError,
    models::{ListQuery, StatusUpdate, TodoInput},
    store,
};
use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Creates a new todo for the authenticated user.
///
/// ## Request Body:
/// - `title`: required, 1 to 200 characters.
/// - `description` (optional): up to 1000 characters.
///
/// ## Responses:
/// - `201 Created`: the new `Todo`, status `pending`.
/// - `400 Bad Request`: missing or invalid fields.
/// - `401 Unauthorized`: no valid token.
#[post("")]
pub async fn create_todo(
    pool: web::Data<PgPool>,
    user: CurrentUser,
    todo_data: web::Json<TodoInput>,
) -> Result<impl Responder, AppError> {
    todo_data.validate()?;

    let todo = store::todos::create(&pool, user.id, todo_data.into_inner()).await?;

    Ok(HttpResponse::Created().json(todo))
}

/// Lists the authenticated user's todos, paginated.
///
/// `page` and `limit` default to 1 and 10 when absent or non-positive.
/// Ordered by creation time, most recent first. The response carries
/// `page`, `limit`, `total`, `totalPages` and the `data` array; a page past
/// the end is an empty `data` with `totalPages` unchanged.
///
/// ## Responses:
/// - `200 OK`: one `TodoPage`.
/// - `401 Unauthorized`: no valid token.
#[get("")]
pub async fn list_todos(
    pool: web::Data<PgPool>,
    user: CurrentUser,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, AppError> {
    let page = store::todos::list(&pool, user.id, query.page, query.limit).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Transitions a todo between `pending` and `completed`.
///
/// The lookup is scoped by id and owner in one atomic update, so a todo
/// owned by another account is reported as missing, never as forbidden.
///
/// ## Responses:
/// - `200 OK`: the updated `Todo`.
/// - `400 Bad Request`: status outside the enum.
/// - `401 Unauthorized`: no valid token.
/// - `404 Not Found`: no such todo for this owner.
#[patch("/{id}")]
pub async fn update_status(
    pool: web::Data<PgPool>,
    user: CurrentUser,
    todo_id: web::Path<Uuid>,
    update: web::Json<StatusUpdate>,
) -> Result<impl Responder, AppError> {
    let todo =
        store::todos::set_status(&pool, user.id, todo_id.into_inner(), update.status).await?;

    match todo {
        Some(todo) => Ok(HttpResponse::Ok().json(todo)),
        None => Err(AppError::NotFound("Todo not found".into())),
    }
}

/// Deletes a todo owned by the authenticated user.
///
/// Same ownership-scoped semantics as the status transition; deleting an
/// already-deleted id keeps returning 404.
///
/// ## Responses:
/// - `204 No Content`: deleted.
/// - `401 Unauthorized`: no valid token.
/// - `404 Not Found`: no such todo for this owner.
#[delete("/{id}")]
pub async fn delete_todo(
    pool: web::Data<PgPool>,
    user: CurrentUser,
    todo_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let deleted = store::todos::delete(&pool, user.id, todo_id.into_inner()).await?;

    if !deleted {
        return Err(AppError::NotFound("Todo not found".into()));
    }

    Ok(HttpResponse::NoContent().finish())
}
