//! MySQL connection pool management

use std::fmt;
use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::info;

use uv_core::errors::DomainError;
use uv_shared::config::DatabaseConfig;

/// Wrapper around the SQLx MySQL pool
///
/// Owns pool sizing and timeout policy; everything else hands out
/// clones of the inner pool (cloning `MySqlPool` is cheap, it is an
/// `Arc` internally).
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

/// Point-in-time pool counters for diagnostics
#[derive(Debug, Clone, Copy)]
pub struct PoolStatistics {
    pub connections: u32,
    pub idle_connections: usize,
    pub max_connections: u32,
}

impl fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} connections ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}

impl DatabasePool {
    /// Create a connection pool from configuration
    pub async fn new(config: DatabaseConfig) -> Result<Self, DomainError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to connect to database: {}", e),
            })?;

        info!(
            max_connections = config.max_connections,
            "Database connection pool created"
        );
        Ok(Self { pool })
    }

    /// Access the inner SQLx pool
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Round-trip a trivial query to confirm the database is reachable
    pub async fn health_check(&self) -> Result<bool, DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Health check failed: {}", e),
            })?;
        Ok(true)
    }

    /// Current pool counters
    pub fn statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        }
    }
}
