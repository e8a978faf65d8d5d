//! Notification gateway contract and mail template rendering

mod template;
mod traits;

pub use template::MailTemplates;
pub use traits::MailerTrait;

/// Subject line for the registration welcome email
pub const REGISTRATION_MAIL_SUBJECT: &str = "Welcome to UserVault - verify your email address";

/// Subject line for the password reset email
pub const PASSWORD_RESET_MAIL_SUBJECT: &str = "UserVault password reset";
