//! Credential codec: one-way password hashing and verification

mod encoder;

pub use encoder::PasswordEncoder;
