//! Authentication service module
//!
//! Owns the account lifecycle: registration with email verification,
//! login, password change, and the forgot/reset password flow. The
//! service is generic over the user repository and the mail gateway so
//! tests run against in-memory doubles.

pub mod config;
pub mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
