//! Authentication route handlers
//!
//! One file per endpoint:
//! - Registration with verification email
//! - Email verification from the mailed link
//! - Login issuing a session token
//! - Password change (session-protected)
//! - Forgot/reset password

pub mod change_password;
pub mod forgot_password;
pub mod login;
pub mod register;
pub mod reset_password;
pub mod verify_email;
