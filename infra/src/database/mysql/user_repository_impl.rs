//! MySQL implementation of the UserRepository trait.
//!
//! UUIDs are stored as CHAR(36) strings; the unique index on `email`
//! is the final authority on duplicates, surfaced to the core as
//! `ValidationError::DuplicateEmail`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use uv_core::domain::entities::user::User;
use uv_core::errors::{DomainError, ValidationError};
use uv_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("id", &e))?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid user UUID: {}", e),
            })?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| db_error("first_name", &e))?,
            middle_name: row
                .try_get("middle_name")
                .map_err(|e| db_error("middle_name", &e))?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| db_error("last_name", &e))?,
            email: row.try_get("email").map_err(|e| db_error("email", &e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| db_error("password_hash", &e))?,
            address: row
                .try_get("address")
                .map_err(|e| db_error("address", &e))?,
            mobile_number: row
                .try_get("mobile_number")
                .map_err(|e| db_error("mobile_number", &e))?,
            is_email_verified: row
                .try_get("is_email_verified")
                .map_err(|e| db_error("is_email_verified", &e))?,
            is_active: row
                .try_get("is_active")
                .map_err(|e| db_error("is_active", &e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("created_at", &e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_error("updated_at", &e))?,
        })
    }
}

fn db_error(column: &str, e: &sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("Failed to get {}: {}", column, e),
    }
}

fn query_error(operation: &str, e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("{}: {}", operation, e),
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, first_name, middle_name, last_name, email, password_hash,
           address, mobile_number, is_email_verified, is_active,
           created_at, updated_at
    FROM users
"#;

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, first_name, middle_name, last_name, email, password_hash,
                address, mobile_number, is_email_verified, is_active,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.first_name)
            .bind(&user.middle_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.address)
            .bind(&user.mobile_number)
            .bind(user.is_email_verified)
            .bind(user.is_active)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(user),
            // The unique index on email reports a duplicate entry
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(ValidationError::DuplicateEmail.into())
            }
            Err(e) => Err(query_error("Failed to create user", e)),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE email = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error("Failed to find user by email", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error("Failed to find user by id", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn mark_email_verified(&self, email: &str) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE users
            SET is_email_verified = TRUE, updated_at = ?
            WHERE email = ?
        "#;

        let result = sqlx::query(query)
            .bind(Utc::now())
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to mark email verified", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE users
            SET password_hash = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(password_hash)
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to update password", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_password_by_email(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE users
            SET password_hash = ?, updated_at = ?
            WHERE email = ?
        "#;

        let result = sqlx::query(query)
            .bind(password_hash)
            .bind(Utc::now())
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to update password by email", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = "SELECT EXISTS(SELECT 1 FROM users WHERE email = ?) AS present";

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_error("Failed to check email existence", e))?;

        let present: i8 = row
            .try_get("present")
            .map_err(|e| db_error("present", &e))?;
        Ok(present == 1)
    }
}
