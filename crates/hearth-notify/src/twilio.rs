use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::{NotifyError, SmsSender};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Twilio SMS client. Credentials are checked at send time so a deployment
/// without SMS still serves email invites.
pub struct TwilioSender {
    client: Client,
    account_sid: Option<String>,
    auth_token: Option<String>,
    from: Option<String>,
}

impl TwilioSender {
    pub fn new(
        account_sid: Option<String>,
        auth_token: Option<String>,
        from: Option<String>,
    ) -> Result<Self, NotifyError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            account_sid,
            auth_token,
            from,
        })
    }
}

#[async_trait]
impl SmsSender for TwilioSender {
    async fn send(&self, to: &str, body: &str) -> Result<(), NotifyError> {
        let (Some(sid), Some(token), Some(from)) = (
            self.account_sid.as_deref(),
            self.auth_token.as_deref(),
            self.from.as_deref(),
        ) else {
            return Err(NotifyError::Config(
                "TWILIO_ACCOUNT_SID/TWILIO_AUTH_TOKEN/TWILIO_FROM",
            ));
        };

        let url = format!("https://api.twilio.com/2010-04-01/Accounts/{sid}/Messages.json");
        let resp = self
            .client
            .post(url)
            .basic_auth(sid, Some(token))
            .form(&[("From", from), ("To", to), ("Body", body)])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(NotifyError::Dispatch {
                provider: "twilio",
                status,
                body,
            });
        }
        Ok(())
    }
}
