//! Outbound mail configuration
//!
//! Covers the SMTP transport, the sender identity, the account-link base
//! URLs embedded in verification/reset emails, and the template directory.

use serde::{Deserialize, Serialize};

/// Configuration for the outbound mail gateway
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Gateway implementation to use ("smtp" or "mock")
    pub provider: String,

    /// SMTP relay hostname
    pub smtp_host: String,

    /// SMTP relay port
    pub smtp_port: u16,

    /// SMTP username
    pub smtp_username: String,

    /// SMTP password
    pub smtp_password: String,

    /// From address for outbound mail
    pub from_address: String,

    /// Support mailbox shown in reset emails
    pub support_email: String,

    /// Base URL for email-verification links (token is appended)
    pub verification_link_base: String,

    /// Base URL for password-reset links (token is appended)
    pub reset_link_base: String,

    /// Directory holding the HTML mail templates
    pub template_dir: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            smtp_host: String::from("localhost"),
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: String::from("no-reply@uservault.dev"),
            support_email: String::from("support@uservault.dev"),
            verification_link_base: String::from("http://localhost:8080/api/v1/auth/verify-email/"),
            reset_link_base: String::from("http://localhost:3000/reset-password/"),
            template_dir: String::from("./templates"),
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: std::env::var("MAIL_PROVIDER").unwrap_or(defaults.provider),
            smtp_host: std::env::var("SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.smtp_port),
            smtp_username: std::env::var("SMTP_USERNAME").unwrap_or(defaults.smtp_username),
            smtp_password: std::env::var("SMTP_PASSWORD").unwrap_or(defaults.smtp_password),
            from_address: std::env::var("MAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
            support_email: std::env::var("MAIL_SUPPORT_ADDRESS").unwrap_or(defaults.support_email),
            verification_link_base: std::env::var("MAIL_VERIFICATION_LINK_BASE")
                .unwrap_or(defaults.verification_link_base),
            reset_link_base: std::env::var("MAIL_RESET_LINK_BASE")
                .unwrap_or(defaults.reset_link_base),
            template_dir: std::env::var("MAIL_TEMPLATE_DIR").unwrap_or(defaults.template_dir),
        }
    }
}
