//! API response types and wrappers
//!
//! Every operation exposed by the auth service resolves to the same
//! envelope: a machine-readable code, an end-user-facing message, optional
//! payload data, and (for login) an optional session token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome codes returned to clients
///
/// The set is intentionally coarse: auth failures, validation failures and
/// not-found conditions all collapse into `InvalidDetails` so the response
/// never reveals which check failed. The specific cause is logged
/// server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseCode {
    /// Operation completed
    Success,
    /// Malformed input, failed authentication, or business-rule violation
    InvalidDetails,
    /// Store operation failed
    DbError,
    /// A time-bound email link has expired
    SessionExpired,
}

impl ResponseCode {
    /// Code string as serialized on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::Success => "SUCCESS",
            ResponseCode::InvalidDetails => "INVALID_DETAILS",
            ResponseCode::DbError => "DB_ERROR",
            ResponseCode::SessionExpired => "SESSION_EXPIRED",
        }
    }
}

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Outcome code
    pub code: ResponseCode,

    /// End-user-facing message
    pub message: String,

    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Session token (present on successful login)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response with data
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            code: ResponseCode::Success,
            message: message.into(),
            data: Some(data),
            token: None,
            timestamp: Utc::now(),
        }
    }

    /// Create a successful response carrying no data
    pub fn success_message(message: impl Into<String>) -> Self {
        Self {
            code: ResponseCode::Success,
            message: message.into(),
            data: None,
            token: None,
            timestamp: Utc::now(),
        }
    }

    /// Create a failure response with the given code
    pub fn failure(code: ResponseCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
            token: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach a session token to the response
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.code == ResponseCode::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let response = ApiResponse::success("Registration successful", serde_json::json!({"id": 1}));
        assert!(response.is_success());
        assert!(response.data.is_some());
        assert!(response.token.is_none());
    }

    #[test]
    fn test_failure_response_omits_data() {
        let response: ApiResponse<()> =
            ApiResponse::failure(ResponseCode::InvalidDetails, "Invalid login details");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"INVALID_DETAILS\""));
        assert!(!json.contains("\"data\""));
        assert!(!json.contains("\"token\""));
    }

    #[test]
    fn test_login_response_carries_token() {
        let response = ApiResponse::success("Login successful", serde_json::json!({}))
            .with_token("jwt-token");
        assert_eq!(response.token.as_deref(), Some("jwt-token"));
    }

    #[test]
    fn test_code_serialization() {
        let json = serde_json::to_string(&ResponseCode::SessionExpired).unwrap();
        assert_eq!(json, "\"SESSION_EXPIRED\"");
        assert_eq!(ResponseCode::DbError.as_str(), "DB_ERROR");
    }
}
