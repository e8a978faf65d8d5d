//! Handler for POST /api/v1/auth/login

use actix_web::{web, HttpResponse};
use validator::Validate;

use uv_core::repositories::UserRepository;
use uv_core::services::mail::MailerTrait;
use uv_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::LoginRequest;
use crate::handlers::{error_response, validation_failure_response};
use crate::middleware::SESSION_TOKEN_HEADER;

/// Authenticates an email/password pair and issues a session token.
///
/// An unknown email and a wrong password produce byte-identical
/// envelopes, so the endpoint cannot be used to probe which addresses
/// hold accounts. On success the session token appears both in the
/// envelope's `token` field and in the `auth` response header.
///
/// # Response
///
/// ```json
/// {
///     "code": "SUCCESS",
///     "message": "Login successful",
///     "data": { "id": "...", "first_name": "Ada", "email": "ada@example.com" },
///     "token": "eyJhbGciOiJIUzI1NiIs..."
/// }
/// ```
pub async fn login<U, M>(
    state: web::Data<AppState<U, M>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MailerTrait + 'static,
{
    if request.validate().is_err() {
        return validation_failure_response();
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(outcome) => HttpResponse::Ok()
            .insert_header((SESSION_TOKEN_HEADER, outcome.token.clone()))
            .json(ApiResponse::success("Login successful", outcome.user).with_token(outcome.token)),
        Err(error) => error_response(&error),
    }
}
