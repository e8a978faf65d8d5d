//! User entity representing a registered account in the UserVault system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
///
/// The password is held only as a one-way credential (`password_hash`);
/// plaintext never reaches persistence. `is_email_verified` and
/// `is_active` are independent gates: both must be true for login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// First name
    pub first_name: String,

    /// Middle name (may be empty)
    pub middle_name: String,

    /// Last name
    pub last_name: String,

    /// Email address, unique across accounts
    pub email: String,

    /// One-way hashed password credential
    pub password_hash: String,

    /// Postal address
    pub address: String,

    /// Mobile number
    pub mobile_number: String,

    /// Whether the email address has been verified
    pub is_email_verified: bool,

    /// Whether the account is active (false = administratively disabled)
    pub is_active: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User in the initial state: unverified, active
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: String,
        middle_name: String,
        last_name: String,
        email: String,
        password_hash: String,
        address: String,
        mobile_number: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name,
            middle_name,
            last_name,
            email,
            password_hash,
            address,
            mobile_number,
            is_email_verified: false,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the email address as verified
    pub fn verify_email(&mut self) {
        self.is_email_verified = true;
        self.updated_at = Utc::now();
    }

    /// Disables the account (administrative action)
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Replaces the stored credential
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Checks whether both login gates are open
    pub fn can_login(&self) -> bool {
        self.is_active && self.is_email_verified
    }

    /// Full display name, skipping an empty middle name
    pub fn full_name(&self) -> String {
        if self.middle_name.is_empty() {
            format!("{} {}", self.first_name, self.last_name)
        } else {
            format!("{} {} {}", self.first_name, self.middle_name, self.last_name)
        }
    }
}
