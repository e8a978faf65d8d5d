//! HTTP middleware and request guards

pub mod auth;
pub mod cors;

pub use auth::{AuthContext, SESSION_TOKEN_HEADER};
pub use cors::create_cors;
