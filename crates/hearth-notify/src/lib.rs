pub mod resend;
pub mod twilio;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("missing provider configuration: {0}")]
    Config(&'static str),

    #[error("{provider} rejected the message ({status}): {body}")]
    Dispatch {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Transactional email delivery.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, text: &str) -> Result<(), NotifyError>;
}

/// SMS delivery.
#[async_trait]
pub trait SmsSender: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> Result<(), NotifyError>;
}
