use anyhow::{Context, Result};

/// Process configuration, read from the environment once at startup and
/// injected into collaborators from `main`.
///
/// Provider credentials stay optional here: a deployment may serve only one
/// channel, and a missing credential is reported at dispatch time as a
/// configuration error on the affected request.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    pub store_url: String,
    pub store_service_key: String,

    pub resend_api_key: Option<String>,
    /// Sender address; defaults to the Resend sandbox sender when unset.
    pub resend_from: Option<String>,

    pub twilio_account_sid: Option<String>,
    pub twilio_auth_token: Option<String>,
    pub twilio_from: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env_or("HEARTH_HOST", "0.0.0.0"),
            port: env_or("HEARTH_PORT", "8787")
                .parse()
                .context("HEARTH_PORT must be a port number")?,
            store_url: required("HEARTH_STORE_URL")?,
            store_service_key: required("HEARTH_STORE_SERVICE_KEY")?,
            resend_api_key: optional("RESEND_API_KEY"),
            resend_from: optional("RESEND_FROM"),
            twilio_account_sid: optional("TWILIO_ACCOUNT_SID"),
            twilio_auth_token: optional("TWILIO_AUTH_TOKEN"),
            twilio_from: optional("TWILIO_FROM"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn required(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("{key} must be set"))
}

fn optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
