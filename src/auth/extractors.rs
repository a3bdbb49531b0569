use actix_web::dev::Payload;
use actix_web::{web, Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::token::Claims;
use crate::error::AppError;
use crate::store;

/// The resolved principal for an authenticated request.
///
/// `AuthMiddleware` verifies the token and stashes its claims; this extractor
/// turns those claims into a live account by looking it up (public fields
/// only — the password hash is never loaded here). A token whose account has
/// since disappeared resolves to a 401, indistinguishable from any other
/// identity failure.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl FromRequest for CurrentUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            // Claims missing means AuthMiddleware did not run on this route.
            let claims = req
                .extensions()
                .get::<Claims>()
                .cloned()
                .ok_or(AppError::MissingCredentials)?;

            let pool = req
                .app_data::<web::Data<PgPool>>()
                .cloned()
                .ok_or_else(|| AppError::Internal("Database pool not configured".into()))?;

            let account = store::users::find_public(&pool, claims.sub).await?;

            match account {
                Some(user) => Ok(CurrentUser {
                    id: user.id,
                    name: user.name,
                    email: user.email,
                }),
                None => Err(AppError::Unauthorized("Account no longer exists".into()).into()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::dev::Payload;
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_rt::test]
    async fn test_current_user_extractor_without_claims() {
        // No middleware ran, so no claims are present; the extractor must
        // refuse with a 401 rather than touch the database.
        let req = test::TestRequest::default().to_http_request();

        let mut payload = Payload::None;
        let extracted = CurrentUser::from_request(&req, &mut payload).await;
        assert!(extracted.is_err());

        let err = extracted.unwrap_err();
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
