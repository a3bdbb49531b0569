use crate::{
    auth::{
        generate_token, hash_password, verify_password, AccountSummary, AuthResponse, CurrentUser,
        LoginRequest, RegisterRequest,
    },
    error::AppError,
    store,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// Register a new user
///
/// Creates a new account and returns an authentication token alongside the
/// account's public identity.
#[post("/register")]
pub async fn register(
    pool: web::Data<PgPool>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;

    let name = register_data.name.trim();
    // Emails are unique case-insensitively; store the normalized form.
    let email = register_data.email.trim().to_lowercase();

    let password_hash = hash_password(&register_data.password)?;
    let user = store::users::create(&pool, name, &email, &password_hash).await?;

    let token = generate_token(user.id)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// Login user
///
/// Authenticates by email + password. Unknown email and wrong password are
/// the same 400 "Invalid credentials" — the response never says which.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let email = login_data.email.trim().to_lowercase();
    let credentials = store::users::find_credentials(&pool, &email).await?;

    match credentials {
        Some(credentials) => {
            if verify_password(&login_data.password, &credentials.password_hash)? {
                let token = generate_token(credentials.id)?;
                Ok(HttpResponse::Ok().json(AuthResponse {
                    token,
                    user: AccountSummary {
                        id: credentials.id,
                        name: credentials.name,
                        email: credentials.email,
                    },
                }))
            } else {
                Err(AppError::InvalidCredentials)
            }
        }
        None => Err(AppError::InvalidCredentials),
    }
}

/// Returns the authenticated account's public identity.
///
/// The whole resolution already happened in the middleware + extractor; the
/// handler only echoes the principal back.
#[get("/profile")]
pub async fn profile(user: CurrentUser) -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().json(user))
}
