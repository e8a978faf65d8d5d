//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and uses Result types for error handling.
//! Implementations handle the actual database operations while keeping
//! the abstraction boundary between domain and infrastructure layers.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// All operations are single-row; the core logic requires no multi-row
/// transactions. Email uniqueness is ultimately enforced by the store's
/// unique index; `create` surfaces a duplicate as
/// `ValidationError::DuplicateEmail`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError)` - Creation failed (duplicate email surfaces as
    ///   a validation error)
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Set `is_email_verified` for the account with the given email
    ///
    /// # Returns
    /// * `Ok(true)` - A row was updated
    /// * `Ok(false)` - No account with that email
    async fn mark_email_verified(&self, email: &str) -> Result<bool, DomainError>;

    /// Replace the stored credential for the account with the given id
    ///
    /// # Returns
    /// * `Ok(true)` - A row was updated
    /// * `Ok(false)` - No account with that id
    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<bool, DomainError>;

    /// Replace the stored credential for the account with the given email
    async fn update_password_by_email(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<bool, DomainError>;

    /// Check if an account exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
