//! Mock mail gateway for development and testing
//!
//! Logs the mail instead of delivering it. A failure toggle lets tests
//! exercise the dispatch-failure paths without a broken relay.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use tracing::info;

use uv_core::errors::DomainError;
use uv_core::services::mail::MailerTrait;

/// Mail gateway that logs instead of sending
pub struct MockMailer {
    sent_count: AtomicU64,
    simulate_failure: AtomicBool,
}

impl MockMailer {
    /// Create a new mock mailer
    pub fn new() -> Self {
        Self {
            sent_count: AtomicU64::new(0),
            simulate_failure: AtomicBool::new(false),
        }
    }

    /// Make every subsequent send fail
    pub fn set_simulate_failure(&self, fail: bool) {
        self.simulate_failure.store(fail, Ordering::SeqCst);
    }

    /// Number of mails accepted so far
    pub fn sent_count(&self) -> u64 {
        self.sent_count.load(Ordering::SeqCst)
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailerTrait for MockMailer {
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        body_html: &str,
    ) -> Result<String, DomainError> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            return Err(DomainError::Internal {
                message: "Mock mailer failure".to_string(),
            });
        }

        let n = self.sent_count.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            to = %to,
            subject = %subject,
            body_bytes = body_html.len(),
            "[MOCK MAIL] message accepted"
        );
        Ok(format!("mock-{}", n))
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
