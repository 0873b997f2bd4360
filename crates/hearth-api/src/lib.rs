pub mod error;
pub mod invite;

use std::sync::Arc;

use axum::{Router, http::Method, routing::post};
use tower_http::cors::{Any, CorsLayer};

use hearth_notify::{Mailer, SmsSender};
use hearth_store::Store;

/// Shared state handed to every request handler. Collaborators are injected
/// as trait objects so tests can substitute in-memory doubles.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub mailer: Arc<dyn Mailer>,
    pub sms: Arc<dyn SmsSender>,
}

/// Build the service router. The mobile app calls this endpoint from a
/// webview, so preflights must be answered.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/invites", post(invite::send_invite))
        .layer(cors)
        .with_state(state)
}
