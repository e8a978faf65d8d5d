//! Handler for POST /api/v1/auth/reset-password

use actix_web::{web, HttpResponse};
use validator::Validate;

use uv_core::repositories::UserRepository;
use uv_core::services::mail::MailerTrait;
use uv_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::ResetPasswordRequest;
use crate::handlers::{error_response, validation_failure_response};

/// Completes the reset flow started by forgot-password.
///
/// The token is the hex-encoded value from the mailed link. An expired
/// link answers `SESSION_EXPIRED` so the client can offer to start
/// over; a token minted for email verification is rejected outright.
pub async fn reset_password<U, M>(
    state: web::Data<AppState<U, M>>,
    request: web::Json<ResetPasswordRequest>,
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
        .reset_password(&request.token, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::success_message(
            "Password reset, you can now log in",
        )),
        Err(error) => error_response(&error),
    }
}
