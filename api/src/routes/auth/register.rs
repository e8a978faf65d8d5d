//! Handler for POST /api/v1/auth/register

use actix_web::{web, HttpResponse};
use validator::Validate;

use uv_core::domain::value_objects::RegisterUser;
use uv_core::repositories::UserRepository;
use uv_core::services::mail::MailerTrait;
use uv_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::RegisterRequest;
use crate::handlers::{error_response, validation_failure_response};

/// Registers a new account and dispatches the verification email.
///
/// # Request Body
///
/// ```json
/// {
///     "first_name": "Ada",
///     "middle_name": "",
///     "last_name": "Lovelace",
///     "email": "ada@example.com",
///     "password": "correct-horse",
///     "address": "12 Analytical Row",
///     "mobile_number": "+61400000000"
/// }
/// ```
///
/// # Response
///
/// Always HTTP 200; the envelope `code` carries the outcome. On success
/// the data reports whether the verification mail went out:
///
/// ```json
/// {
///     "code": "SUCCESS",
///     "message": "Registration successful, please check your email",
///     "data": {
///         "user_id": "550e8400-e29b-41d4-a716-446655440000",
///         "verification_email_sent": true
///     }
/// }
/// ```
pub async fn register<U, M>(
    state: web::Data<AppState<U, M>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MailerTrait + 'static,
{
    if request.validate().is_err() {
        return validation_failure_response();
    }

    let request = request.into_inner();
    let input = RegisterUser {
        first_name: request.first_name,
        middle_name: request.middle_name,
        last_name: request.last_name,
        email: request.email,
        password: request.password,
        address: request.address,
        mobile_number: request.mobile_number,
    };

    match state.auth_service.register(input).await {
        Ok(outcome) => HttpResponse::Ok().json(ApiResponse::success(
            "Registration successful, please check your email",
            outcome,
        )),
        Err(error) => error_response(&error),
    }
}
