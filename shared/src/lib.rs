//! Shared utilities and common types for the UserVault server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The uniform API response envelope
//! - Utility functions (email validation, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment, JwtConfig, MailConfig, ServerConfig};
pub use types::response::{ApiResponse, ResponseCode};
pub use utils::validation;
