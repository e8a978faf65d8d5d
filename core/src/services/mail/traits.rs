//! Mail gateway trait consumed by the auth service
//!
//! Implementations live in the infrastructure layer (SMTP via lettre,
//! mock for development and tests). The core only supplies recipient,
//! subject, and HTML body.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Outbound mail gateway
#[async_trait]
pub trait MailerTrait: Send + Sync {
    /// Send an HTML email
    ///
    /// # Returns
    /// * `Ok(message_id)` - Gateway-assigned identifier for the message
    /// * `Err(DomainError)` - Dispatch failed
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        body_html: &str,
    ) -> Result<String, DomainError>;

    /// Name of the mail provider (e.g. "smtp", "mock")
    fn provider_name(&self) -> &str;
}
