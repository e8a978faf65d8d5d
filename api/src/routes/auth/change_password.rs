//! Handler for POST /api/v1/auth/change-password

use actix_web::{web, HttpResponse};
use validator::Validate;

use uv_core::repositories::UserRepository;
use uv_core::services::mail::MailerTrait;
use uv_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::ChangePasswordRequest;
use crate::handlers::{error_response, validation_failure_response};
use crate::middleware::AuthContext;

/// Replaces the password of the authenticated caller.
///
/// Requires a valid session token in the `auth` header; the current
/// password is re-checked even though the session already proves
/// identity.
pub async fn change_password<U, M>(
    ctx: AuthContext,
    state: web::Data<AppState<U, M>>,
    request: web::Json<ChangePasswordRequest>,
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
        .change_password(ctx.user_id, &request.current_password, &request.new_password)
        .await
    {
        Ok(()) => {
            HttpResponse::Ok().json(ApiResponse::<()>::success_message("Password changed"))
        }
        Err(error) => error_response(&error),
    }
}
