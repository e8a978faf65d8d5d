//! Password encoder backed by bcrypt.
//!
//! The stored credential is a salted one-way hash; comparison goes
//! through `bcrypt::verify` rather than decrypting anything. The
//! original system used reversible encryption here, which leaked
//! plaintext recoverability into the store; this codec replaces it.

use crate::errors::{DomainError, DomainResult};

/// One-way password codec over bcrypt
#[derive(Debug, Clone)]
pub struct PasswordEncoder {
    cost: u32,
}

impl PasswordEncoder {
    /// Creates an encoder with the given bcrypt cost factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes a plaintext password into a storable credential
    ///
    /// Tolerates arbitrary printable input; no length limit is enforced
    /// here (upstream validation owns that).
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    /// Verifies a plaintext password against a stored credential
    pub fn verify(&self, plaintext: &str, credential: &str) -> DomainResult<bool> {
        bcrypt::verify(plaintext, credential).map_err(|e| DomainError::Internal {
            message: format!("Password verification failed: {}", e),
        })
    }
}

impl Default for PasswordEncoder {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
