//! Authentication and token signing configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Session token expiry time in seconds
    pub session_token_expiry: i64,

    /// Email-link token (verification/reset) expiry time in seconds
    pub link_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            session_token_expiry: 86400,   // 24 hours
            link_token_expiry: 3600,       // 1 hour
            issuer: String::from("uservault"),
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set session token expiry in hours
    pub fn with_session_expiry_hours(mut self, hours: i64) -> Self {
        self.session_token_expiry = hours * 3600;
        self
    }

    /// Set link token expiry in minutes
    pub fn with_link_expiry_minutes(mut self, minutes: i64) -> Self {
        self.link_token_expiry = minutes * 60;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-please-change-in-production"
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "development-secret-please-change-in-production".to_string());
        let session_token_expiry = std::env::var("JWT_SESSION_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .unwrap_or(86400);
        let link_token_expiry = std::env::var("JWT_LINK_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .unwrap_or(3600);

        Self {
            secret,
            session_token_expiry,
            link_token_expiry,
            issuer: String::from("uservault"),
            algorithm: default_algorithm(),
        }
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}
