use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::{Mailer, NotifyError};

const API_URL: &str = "https://api.resend.com/emails";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Resend transactional email client. The API key is checked at send time,
/// not construction, so a deployment without email still serves SMS invites.
pub struct ResendMailer {
    client: Client,
    api_key: Option<String>,
    from: String,
}

impl ResendMailer {
    /// Provider sandbox sender, usable before any domain is verified. Set
    /// `RESEND_FROM` to a verified address to send from your own domain.
    pub const SANDBOX_FROM: &'static str = "onboarding@resend.dev";

    pub fn new(api_key: Option<String>, from: Option<String>) -> Result<Self, NotifyError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key,
            from: from.unwrap_or_else(|| Self::SANDBOX_FROM.to_string()),
        })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, to: &str, subject: &str, text: &str) -> Result<(), NotifyError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(NotifyError::Config("RESEND_API_KEY"));
        };

        let resp = self
            .client
            .post(API_URL)
            .bearer_auth(api_key)
            .json(&json!({
                "from": format!("Hearth <{}>", self.from),
                "to": [to],
                "subject": subject,
                "text": text,
                "html": text_to_html(text),
            }))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(NotifyError::Dispatch {
                provider: "resend",
                status,
                body,
            });
        }
        Ok(())
    }
}

fn text_to_html(text: &str) -> String {
    format!("<p>{}</p>", text.replace('\n', "<br/>"))
}
