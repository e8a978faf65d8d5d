//! Handler for GET /api/v1/auth/verify-email/{token}

use actix_web::{web, HttpResponse};

use uv_core::repositories::UserRepository;
use uv_core::services::mail::MailerTrait;
use uv_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::handlers::error_response;

/// Marks the account's email as verified from the mailed link.
///
/// The path segment is the hex-encoded link token exactly as embedded
/// in the verification email. An expired link answers with
/// `SESSION_EXPIRED`; a tampered or unknown one with the generic
/// failure.
pub async fn verify_email<U, M>(
    state: web::Data<AppState<U, M>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MailerTrait + 'static,
{
    let token_hex = path.into_inner();

    match state.auth_service.verify_email(&token_hex).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::success_message(
            "Email address verified, you can now log in",
        )),
        Err(error) => error_response(&error),
    }
}
