//! Integration tests for the mail gateway factory
//!
//! Exercises the gateway through the trait object, the way the API
//! wiring consumes it.

use uv_core::services::mail::MailerTrait;
use uv_infra::mail::create_mailer;
use uv_shared::config::MailConfig;

#[tokio::test]
async fn test_mock_gateway_through_trait_object() {
    let mailer = create_mailer(&MailConfig::default());

    let id = mailer
        .send_mail(
            "ada@example.com",
            "Welcome to UserVault - verify your email address",
            "<p>Hi Ada Lovelace,</p>",
        )
        .await
        .expect("mock gateway accepts mail");
    assert!(id.starts_with("mock-"));
}

#[tokio::test]
#[ignore] // Requires a reachable SMTP relay
async fn test_smtp_gateway_round_trip() {
    let config = MailConfig {
        provider: "smtp".to_string(),
        ..MailConfig::from_env()
    };
    let mailer = create_mailer(&config);

    mailer
        .send_mail(
            &config.support_email,
            "UserVault SMTP smoke test",
            "<p>Relay reachable.</p>",
        )
        .await
        .expect("SMTP relay accepts mail");
}
