//! Mapping from internal errors to the client-facing envelope
//!
//! Internal variants stay precise for the logs; the wire sees only the
//! coarse code and a generic message. Every handled outcome is an
//! HTTP 200 and the `code` field carries the result.

use actix_web::HttpResponse;
use tracing::{error, warn};

use uv_core::errors::{AuthError, DomainError, TokenError};
use uv_shared::types::response::{ApiResponse, ResponseCode};

/// Build the envelope response for a failed operation
pub fn error_response(err: &DomainError) -> HttpResponse {
    let (code, message) = classify(err);

    match code {
        // Store failures are logged loudly; nothing internal leaks out
        ResponseCode::DbError => error!(cause = %err, "Database failure"),
        _ => warn!(cause = %err, "Request failed"),
    }

    HttpResponse::Ok().json(ApiResponse::<()>::failure(code, message))
}

/// Build the envelope response for a request that failed DTO validation
pub fn validation_failure_response() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::<()>::failure(
        ResponseCode::InvalidDetails,
        "Invalid details provided",
    ))
}

fn classify(err: &DomainError) -> (ResponseCode, &'static str) {
    match err {
        DomainError::Auth(auth) => match auth {
            AuthError::InvalidCredentials => {
                (ResponseCode::InvalidDetails, "Invalid login details")
            }
            AuthError::AccountDisabled => (
                ResponseCode::InvalidDetails,
                "Your account has been disabled",
            ),
            AuthError::EmailNotVerified => (
                ResponseCode::InvalidDetails,
                "Please verify your email address",
            ),
            AuthError::UnknownEmail => (ResponseCode::InvalidDetails, "Invalid email address"),
            AuthError::MailDispatchFailed => (
                ResponseCode::InvalidDetails,
                "Unable to send email, please try again later",
            ),
            AuthError::InvalidEmailFormat => {
                (ResponseCode::InvalidDetails, "Invalid details provided")
            }
        },
        DomainError::Token(TokenError::TokenExpired) => {
            (ResponseCode::SessionExpired, "This link has expired")
        }
        DomainError::Database { .. } => (ResponseCode::DbError, "Database error"),
        DomainError::Internal { .. } => (
            ResponseCode::InvalidDetails,
            "Something went wrong, please try again",
        ),
        // Invalid tokens, duplicate emails, and missing records all give
        // the same generic answer
        _ => (ResponseCode::InvalidDetails, "Invalid details provided"),
    }
}
