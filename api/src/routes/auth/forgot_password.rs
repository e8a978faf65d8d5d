//! Handler for POST /api/v1/auth/forgot-password

use actix_web::{web, HttpResponse};
use validator::Validate;

use uv_core::repositories::UserRepository;
use uv_core::services::mail::MailerTrait;
use uv_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::ForgotPasswordRequest;
use crate::handlers::{error_response, validation_failure_response};

/// Mails a password reset link to the given address.
///
/// Here the mail is the operation: a dispatch failure fails the
/// request, unlike registration where the account stands regardless.
pub async fn forgot_password<U, M>(
    state: web::Data<AppState<U, M>>,
    request: web::Json<ForgotPasswordRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MailerTrait + 'static,
{
    if request.validate().is_err() {
        return validation_failure_response();
    }

    match state.auth_service.forgot_password(&request.email).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::success_message(
            "Password reset email sent, please check your inbox",
        )),
        Err(error) => error_response(&error),
    }
}
