mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use hearth_api::AppState;
use hearth_notify::resend::ResendMailer;
use hearth_notify::twilio::TwilioSender;
use hearth_store::http::HttpStore;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hearth=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    let store = HttpStore::new(&config.store_url, &config.store_service_key)?;
    let mailer = ResendMailer::new(config.resend_api_key.clone(), config.resend_from.clone())?;
    let sms = TwilioSender::new(
        config.twilio_account_sid.clone(),
        config.twilio_auth_token.clone(),
        config.twilio_from.clone(),
    )?;

    let state = AppState {
        store: Arc::new(store),
        mailer: Arc::new(mailer),
        sms: Arc::new(sms),
    };

    let app = hearth_api::router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Hearth invite service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
