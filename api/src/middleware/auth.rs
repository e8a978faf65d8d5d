//! Session authentication guard
//!
//! Protected handlers take an `AuthContext` argument; extraction reads
//! the session token from the `auth` request header and validates it
//! against the token service in app data. Extraction failure
//! short-circuits the handler with the usual envelope: an expired
//! session gets `SESSION_EXPIRED`, anything else the generic failure.

use std::future::{ready, Ready};
use std::sync::Arc;

use actix_web::dev::Payload;
use actix_web::{error::InternalError, web, FromRequest, HttpRequest, HttpResponse};
use uuid::Uuid;

use uv_core::domain::value_objects::UserProfile;
use uv_core::errors::{DomainError, TokenError};
use uv_core::services::token::TokenService;
use uv_shared::types::response::{ApiResponse, ResponseCode};

/// Request header carrying the session token
///
/// The same header name is used on the login response to hand the token
/// out.
pub const SESSION_TOKEN_HEADER: &str = "auth";

/// Authenticated caller identity for protected handlers
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User id from the validated session claims
    pub user_id: Uuid,
    /// Sanitized user projection carried in the token
    pub profile: UserProfile,
}

impl FromRequest for AuthContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthContext, actix_web::Error> {
    let token_service = req
        .app_data::<web::Data<Arc<TokenService>>>()
        .ok_or_else(|| rejection(ResponseCode::InvalidDetails, "Invalid session"))?;

    let token = req
        .headers()
        .get(SESSION_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| rejection(ResponseCode::InvalidDetails, "Invalid session"))?;

    match token_service.validate_session_token(token) {
        Ok(claims) => {
            let user_id = claims
                .user_id()
                .map_err(|_| rejection(ResponseCode::InvalidDetails, "Invalid session"))?;
            Ok(AuthContext {
                user_id,
                profile: claims.user,
            })
        }
        Err(DomainError::Token(TokenError::TokenExpired)) => Err(rejection(
            ResponseCode::SessionExpired,
            "Your session has expired, please log in again",
        )),
        Err(_) => Err(rejection(ResponseCode::InvalidDetails, "Invalid session")),
    }
}

fn rejection(code: ResponseCode, message: &'static str) -> actix_web::Error {
    let response = HttpResponse::Ok().json(ApiResponse::<()>::failure(code, message));
    InternalError::from_response(message, response).into()
}
