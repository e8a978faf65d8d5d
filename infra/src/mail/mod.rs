//! Outbound mail gateways
//!
//! Two implementations of the core's `MailerTrait`:
//!
//! - **SMTP**: production delivery through a relay via lettre
//! - **Mock**: logs the mail instead of sending it, for development
//!   and tests

pub mod mock_mailer;
pub mod smtp;

pub use mock_mailer::MockMailer;
pub use smtp::SmtpMailer;


use async_trait::async_trait;
use tracing::warn;

use uv_core::errors::DomainError;
use uv_core::services::mail::MailerTrait;
use uv_shared::config::MailConfig;

/// Configured mail gateway
///
/// A concrete dispatching type rather than a trait object, so the
/// generic service stack stays free of `dyn` plumbing.
pub enum Mailer {
    Smtp(SmtpMailer),
    Mock(MockMailer),
}

#[async_trait]
impl MailerTrait for Mailer {
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        body_html: &str,
    ) -> Result<String, DomainError> {
        match self {
            Mailer::Smtp(mailer) => mailer.send_mail(to, subject, body_html).await,
            Mailer::Mock(mailer) => mailer.send_mail(to, subject, body_html).await,
        }
    }

    fn provider_name(&self) -> &str {
        match self {
            Mailer::Smtp(mailer) => mailer.provider_name(),
            Mailer::Mock(mailer) => mailer.provider_name(),
        }
    }
}

/// Create a mail gateway based on configuration
///
/// Unknown provider names fall back to the mock so a misconfigured
/// environment still boots.
pub fn create_mailer(config: &MailConfig) -> Mailer {
    match config.provider.as_str() {
        "smtp" => match SmtpMailer::new(config) {
            Ok(mailer) => Mailer::Smtp(mailer),
            Err(e) => {
                warn!(error = %e, "Failed to initialize SMTP mailer, falling back to mock");
                Mailer::Mock(MockMailer::new())
            }
        },
        "mock" => Mailer::Mock(MockMailer::new()),
        other => {
            warn!(provider = %other, "Unknown mail provider, using mock implementation");
            Mailer::Mock(MockMailer::new())
        }
    }
}
