//! Configuration for the token service

use jsonwebtoken::Algorithm;

use uv_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Issuer claim stamped into and required from every token
    pub issuer: String,
    /// Email-link token (verification/reset) expiry in seconds
    pub link_token_expiry_seconds: i64,
    /// Session token expiry in seconds
    pub session_token_expiry_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            issuer: "uservault".to_string(),
            link_token_expiry_seconds: 3600,
            session_token_expiry_seconds: 86400,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            // Only symmetric signing is supported; anything else in the
            // config falls back to HS256
            algorithm: match config.algorithm.as_str() {
                "HS384" => Algorithm::HS384,
                "HS512" => Algorithm::HS512,
                _ => Algorithm::HS256,
            },
            issuer: config.issuer.clone(),
            link_token_expiry_seconds: config.link_token_expiry,
            session_token_expiry_seconds: config.session_token_expiry,
        }
    }
}
