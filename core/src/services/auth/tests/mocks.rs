//! Test doubles for the auth service

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::{DomainError, DomainResult};
use crate::services::mail::MailerTrait;

/// A mail captured by the recording mailer
#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body_html: String,
}

/// Mailer that records every send and can be told to fail
pub struct RecordingMailer {
    sent: Arc<RwLock<Vec<SentMail>>>,
    fail: AtomicBool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            fail: AtomicBool::new(false),
        }
    }

    /// Make every subsequent send fail
    pub fn simulate_failure(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.read().await.len()
    }

    pub async fn last_sent(&self) -> Option<SentMail> {
        self.sent.read().await.last().cloned()
    }
}

#[async_trait]
impl MailerTrait for RecordingMailer {
    async fn send_mail(&self, to: &str, subject: &str, body_html: &str) -> DomainResult<String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::Internal {
                message: "Simulated mail gateway outage".to_string(),
            });
        }

        let mut sent = self.sent.write().await;
        sent.push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body_html: body_html.to_string(),
        });
        Ok(format!("mock-message-{}", sent.len()))
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}
