//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. Component-level code returns typed failures; this is the single
//! place where those failures are translated into transport-level responses.
//!
//! `AppError` implements `actix_web::error::ResponseError` so handlers can
//! bubble errors with `?` and still produce consistent JSON bodies. `From`
//! implementations cover the common library errors (`sqlx::Error`,
//! `validator::ValidationErrors`, `jsonwebtoken::errors::Error`,
//! `bcrypt::BcryptError`).
//!
//! Two deliberate policies live here:
//! - every 401 variant renders the same generic body, so a caller cannot
//!   probe whether a token was missing, malformed, expired, or orphaned;
//! - 500s render a generic body and the detail is only logged server-side.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or missing input (HTTP 400).
    Validation(String),
    /// Uniqueness violation, e.g. registering an email twice (HTTP 400).
    Conflict(String),
    /// Login with an unknown email or wrong password (HTTP 400).
    /// Unknown-email and wrong-password are indistinguishable to the caller.
    InvalidCredentials,
    /// No `Authorization: Bearer <token>` header on a protected route (HTTP 401).
    MissingCredentials,
    /// Token failed signature or structural checks (HTTP 401).
    InvalidToken,
    /// Token signature was fine but the expiry has passed (HTTP 401).
    ExpiredToken,
    /// Identity could not be trusted for some other reason, e.g. the
    /// account behind a valid token no longer exists (HTTP 401).
    Unauthorized(String),
    /// Requested resource absent — or owned by someone else, which must look
    /// identical (HTTP 404).
    NotFound(String),
    /// Error originating from the database layer (HTTP 500).
    Database(String),
    /// Any other unexpected server-side failure (HTTP 500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::MissingCredentials => write!(f, "Authorization token missing"),
            AppError::InvalidToken => write!(f, "Invalid token"),
            AppError::ExpiredToken => write!(f, "Expired token"),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal server error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into `HttpResponse` objects.
///
/// All identity failures collapse into one generic 401 body, and all
/// server-side failures into one generic 500 body with the detail logged.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::Conflict(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::InvalidCredentials => HttpResponse::BadRequest().json(json!({
                "error": "Invalid credentials"
            })),
            AppError::MissingCredentials
            | AppError::InvalidToken
            | AppError::ExpiredToken
            | AppError::Unauthorized(_) => HttpResponse::Unauthorized().json(json!({
                "error": "Invalid or expired token"
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "error": msg
            })),
            AppError::Database(_) | AppError::Internal(_) => {
                log::error!("{}", self);
                HttpResponse::InternalServerError().json(json!({
                    "error": "Internal server error"
                }))
            }
        }
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// `RowNotFound` maps to `NotFound`; everything else is a database error.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => AppError::Database(error.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::Validation(error.to_string())
    }
}

/// Converts `jsonwebtoken::errors::Error` into the token error variants.
///
/// Expiry gets its own variant; every other decode failure (bad signature,
/// malformed structure) is `InvalidToken`.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        match error.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::ExpiredToken,
            _ => AppError::InvalidToken,
        }
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_responses() {
        let error = AppError::Validation("Title is required".into());
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::Conflict("Email already in use".into());
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::InvalidCredentials;
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::NotFound("Todo not found".into());
        assert_eq!(error.error_response().status(), 404);

        let error = AppError::Internal("Server error".into());
        assert_eq!(error.error_response().status(), 500);
    }

    #[test]
    fn test_identity_errors_are_indistinguishable() {
        // All four identity failures must be 401; their bodies are identical
        // as well, so none of them leaks why identity failed.
        let variants = vec![
            AppError::MissingCredentials,
            AppError::InvalidToken,
            AppError::ExpiredToken,
            AppError::Unauthorized("account deleted".into()),
        ];
        for error in variants {
            assert_eq!(error.error_response().status(), 401);
        }
    }

    #[test]
    fn test_jwt_error_mapping() {
        let expired =
            jsonwebtoken::errors::Error::from(jsonwebtoken::errors::ErrorKind::ExpiredSignature);
        assert!(matches!(AppError::from(expired), AppError::ExpiredToken));

        let garbage =
            jsonwebtoken::errors::Error::from(jsonwebtoken::errors::ErrorKind::InvalidSignature);
        assert!(matches!(AppError::from(garbage), AppError::InvalidToken));
    }
}
