//! # API Layer
//!
//! HTTP surface of the UserVault service, built on actix-web. Every
//! endpoint resolves to the shared response envelope; the HTTP status
//! is 200 for all handled outcomes and the `code` field carries the
//! result.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
