//! Configuration for the authentication service

use uv_shared::config::MailConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Base URL the hex-encoded verification token is appended to
    pub verification_link_base: String,

    /// Base URL the hex-encoded reset token is appended to
    pub reset_link_base: String,

    /// Support mailbox substituted into the reset email body
    pub support_email: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self::from(&MailConfig::default())
    }
}

impl From<&MailConfig> for AuthServiceConfig {
    fn from(config: &MailConfig) -> Self {
        Self {
            verification_link_base: config.verification_link_base.clone(),
            reset_link_base: config.reset_link_base.clone(),
            support_email: config.support_email.clone(),
        }
    }
}
