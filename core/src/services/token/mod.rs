//! Signed, time-limited token issuing and validation

mod config;
mod service;

pub use config::TokenServiceConfig;
pub use service::TokenService;
