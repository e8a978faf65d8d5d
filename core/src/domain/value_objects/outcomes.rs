//! Operation outcomes returned by the auth service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::profile::UserProfile;

/// Outcome of a successful registration
///
/// Persistence and notification are reported separately: the record is
/// created even when the verification mail could not be dispatched, and
/// `verification_email_sent` tells the caller which of the two happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationOutcome {
    /// Identifier of the created user record
    pub user_id: Uuid,

    /// Whether the verification email was handed to the mail gateway
    pub verification_email_sent: bool,
}

/// Outcome of a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginOutcome {
    /// Sanitized user projection
    pub user: UserProfile,

    /// Signed session token carrying the same projection
    pub token: String,
}
