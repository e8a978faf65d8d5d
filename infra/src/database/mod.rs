//! Database module - MySQL implementations using SQLx
//!
//! Provides the connection pool and the concrete repository
//! implementations backing the core's persistence traits.

pub mod connection;
pub mod mysql;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::MySqlUserRepository;
