//! Domain-specific error types for authentication and related operations
//!
//! Internal error variants stay precise so logs retain the real cause;
//! the presentation layer collapses them into the coarse client-facing
//! outcome codes.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email format")]
    InvalidEmailFormat,

    /// Covers both unknown email and wrong password on login so the
    /// client-facing message never reveals which factor failed
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account disabled")]
    AccountDisabled,

    #[error("Email not verified")]
    EmailNotVerified,

    /// Forgot-password was asked for an email with no account
    #[error("Unknown email address")]
    UnknownEmail,

    #[error("Mail dispatch failed")]
    MailDispatchFailed,
}

/// Token-related errors
///
/// `TokenExpired` and `InvalidToken` are deliberately distinct: link
/// flows surface a dedicated "link expired" message for the former,
/// while a tampered or malformed token gets the generic failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Email address already registered")]
    DuplicateEmail,
}
