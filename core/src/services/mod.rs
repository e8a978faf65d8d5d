//! Business services

pub mod auth;
pub mod mail;
pub mod password;
pub mod token;
