use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use hearth_notify::NotifyError;
use hearth_store::StoreError;

/// Everything a handler can fail with, converted to a JSON body at the
/// boundary. Nothing is retried here; the caller must see every failure so
/// the app never shows "sent" for an invite that wasn't.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Service misconfigured: {0}")]
    Config(String),

    #[error("Delivery failed: {0}")]
    Dispatch(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Dispatch(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Validation(_) => "VALIDATION",
            Self::Config(_) => "CONFIG",
            Self::Dispatch(_) => "DISPATCH",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();
        let message = self.to_string();

        match &self {
            ApiError::Config(msg) | ApiError::Dispatch(msg) | ApiError::Internal(msg) => {
                error!(error_code = code, message = %msg, "request failed");
            }
            _ => {
                debug!(error_code = code, message = %message, "request rejected");
            }
        }

        (
            status,
            Json(ErrorBody {
                error: message,
                code,
            }),
        )
            .into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<NotifyError> for ApiError {
    fn from(err: NotifyError) -> Self {
        match err {
            NotifyError::Config(_) => ApiError::Config(err.to_string()),
            // A provider that cannot be reached or times out counts as a
            // failed dispatch, same as an explicit rejection.
            NotifyError::Dispatch { .. } | NotifyError::Transport(_) => {
                ApiError::Dispatch(err.to_string())
            }
        }
    }
}
