//! Domain entities

pub mod token;
pub mod user;

pub use token::{LinkClaims, SessionClaims, TokenPurpose};
pub use user::User;
