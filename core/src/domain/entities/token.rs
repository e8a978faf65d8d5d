//! Token claim structures for JWT-based link and session tokens.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::UserProfile;

/// What a signed email-link token authorizes
///
/// The purpose is embedded in the claims so a password-reset link can
/// never be replayed against the verify-email endpoint or vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPurpose {
    /// Confirms ownership of the registered email address
    EmailVerification,
    /// Authorizes a password reset for the claimed email address
    PasswordReset,
}

/// Claims carried by an email-link token (verification or reset)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkClaims {
    /// Subject: the claimed email address
    pub sub: String,

    /// What this token authorizes
    pub purpose: TokenPurpose,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl LinkClaims {
    /// Creates link claims for the given email, expiring after `expiry_seconds`
    pub fn new(email: &str, purpose: TokenPurpose, issuer: &str, expiry_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_seconds);
        Self {
            sub: email.to_string(),
            purpose,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Claims carried by a session token issued on login
///
/// Carries only the sanitized profile: no credential, no gate flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the user id
    pub sub: String,

    /// Sanitized user projection
    pub user: UserProfile,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl SessionClaims {
    /// Creates session claims for the given profile, expiring after `expiry_seconds`
    pub fn new(user: UserProfile, issuer: &str, expiry_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_seconds);
        Self {
            sub: user.id.to_string(),
            user,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
        }
    }

    /// Gets the user id from the claims
    pub fn user_id(&self) -> Result<uuid::Uuid, uuid::Error> {
        uuid::Uuid::parse_str(&self.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_link_claims_expiry_window() {
        let claims = LinkClaims::new("a@x.com", TokenPurpose::EmailVerification, "uservault", 3600);
        assert_eq!(claims.sub, "a@x.com");
        assert!(!claims.is_expired());
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_link_claims_expired_in_past() {
        let claims = LinkClaims::new("a@x.com", TokenPurpose::PasswordReset, "uservault", -10);
        assert!(claims.is_expired());
    }

    #[test]
    fn test_session_claims_subject_is_user_id() {
        let profile = UserProfile {
            id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            middle_name: String::new(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            address: "12 Analytical Row".to_string(),
            mobile_number: "+61400000000".to_string(),
        };
        let claims = SessionClaims::new(profile.clone(), "uservault", 86400);
        assert_eq!(claims.user_id().unwrap(), profile.id);
    }

    #[test]
    fn test_purpose_serialization() {
        let json = serde_json::to_string(&TokenPurpose::EmailVerification).unwrap();
        assert_eq!(json, "\"email_verification\"");
        let json = serde_json::to_string(&TokenPurpose::PasswordReset).unwrap();
        assert_eq!(json, "\"password_reset\"");
    }
}
