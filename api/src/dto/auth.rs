//! Authentication request DTOs
//!
//! Structural validation only (presence, length, email shape); the
//! business rules live in the core service. Validation failures never
//! echo field contents back to the client.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for POST /api/v1/auth/register
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    pub first_name: String,

    /// Optional; an absent middle name is stored as an empty string
    #[serde(default)]
    #[validate(length(max = 100, message = "Middle name is too long"))]
    pub middle_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name is required"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8 to 128 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 255, message = "Address is required"))]
    pub address: String,

    #[validate(length(min = 1, max = 20, message = "Mobile number is required"))]
    pub mobile_number: String,
}

/// Request body for POST /api/v1/auth/login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request body for POST /api/v1/auth/change-password
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8 to 128 characters"))]
    pub new_password: String,
}

/// Request body for POST /api/v1/auth/forgot-password
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

/// Request body for POST /api/v1/auth/reset-password
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1, message = "Token is required"))]
    pub token: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8 to 128 characters"))]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            first_name: "Ada".to_string(),
            middle_name: String::new(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "correct-horse".to_string(),
            address: "12 Analytical Row".to_string(),
            mobile_number: "+61400000000".to_string(),
        }
    }

    #[test]
    fn test_register_request_valid() {
        assert!(register_request().validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_bad_email() {
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            ..register_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_rejects_short_password() {
        let request = RegisterRequest {
            password: "short".to_string(),
            ..register_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_middle_name_defaults_empty() {
        let request: RegisterRequest = serde_json::from_value(serde_json::json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "password": "correct-horse",
            "address": "12 Analytical Row",
            "mobile_number": "+61400000000"
        }))
        .unwrap();
        assert!(request.middle_name.is_empty());
        assert!(request.validate().is_ok());
    }
}
