//! SMTP mail gateway via lettre

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, info};

use uv_core::errors::DomainError;
use uv_core::services::mail::MailerTrait;
use uv_shared::config::MailConfig;

/// Mail gateway sending through an SMTP relay
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpMailer {
    /// Create a mailer from configuration
    ///
    /// Fails if the relay hostname is unusable; network problems only
    /// surface later, on send.
    pub fn new(config: &MailConfig) -> Result<Self, DomainError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to create SMTP transport: {}", e),
            })?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        info!(host = %config.smtp_host, port = config.smtp_port, "SMTP mailer configured");
        Ok(Self {
            transport,
            from_address: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl MailerTrait for SmtpMailer {
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        body_html: &str,
    ) -> Result<String, DomainError> {
        let message_id = format!("<{}@uservault>", uuid::Uuid::new_v4());
        let message = Message::builder()
            .message_id(Some(message_id.clone()))
            .from(
                self.from_address
                    .parse()
                    .map_err(|e| DomainError::Internal {
                        message: format!("Invalid from address: {}", e),
                    })?,
            )
            .to(to.parse().map_err(|e| DomainError::Internal {
                message: format!("Invalid to address: {}", e),
            })?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body_html.to_string())
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to build email: {}", e),
            })?;

        self.transport
            .send(message)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("SMTP send failed: {}", e),
            })?;

        debug!(to = %to, "Email handed to SMTP relay");
        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "smtp"
    }
}
