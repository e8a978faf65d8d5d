//! Registration input carried from the HTTP layer into the auth service.

use serde::{Deserialize, Serialize};

/// Fields supplied by a registering user
///
/// `password` is plaintext here and exists only in memory for the
/// duration of the operation; it is hashed before any persistence call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUser {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub mobile_number: String,
}
