//! Sanitized user projection returned to callers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::User;

/// User projection with the credential and gate flags stripped
///
/// This is the only shape of user data that leaves the auth service:
/// no `password_hash`, no `is_email_verified`, no `is_active`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier for the user
    pub id: Uuid,

    /// First name
    pub first_name: String,

    /// Middle name (may be empty)
    pub middle_name: String,

    /// Last name
    pub last_name: String,

    /// Email address
    pub email: String,

    /// Postal address
    pub address: String,

    /// Mobile number
    pub mobile_number: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            middle_name: user.middle_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            address: user.address.clone(),
            mobile_number: user.mobile_number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_omits_credential_and_flags() {
        let user = User::new(
            "Ada".to_string(),
            String::new(),
            "Lovelace".to_string(),
            "ada@example.com".to_string(),
            "$2b$12$hash".to_string(),
            "12 Analytical Row".to_string(),
            "+61400000000".to_string(),
        );
        let profile = UserProfile::from(&user);
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("is_email_verified"));
        assert!(!json.contains("is_active"));
        assert_eq!(profile.email, user.email);
    }
}
