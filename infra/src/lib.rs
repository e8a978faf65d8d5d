//! # Infrastructure Layer
//!
//! Concrete implementations behind the core's abstraction seams:
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Mail**: SMTP gateway via lettre, plus a console mock for
//!   development and tests
//!
//! The core crate never sees these types directly; it works against the
//! `UserRepository` and `MailerTrait` traits.

pub mod database;
pub mod mail;
