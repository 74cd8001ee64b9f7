/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Structured error object carried in JSON responses
///
/// `code` mirrors the HTTP status of the response. When an envelope is
/// present, no result data accompanies it.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub code: u16,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] reverb_core::CoreError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    /// HTTP status and client-facing message for this error
    ///
    /// Backend failures collapse to a generic message; their detail is logged
    /// server-side and never reaches the client.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ServerError::Store(e) => {
                tracing::error!("store error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "server error".to_string())
            }
            ServerError::Config(msg) => {
                tracing::error!("config error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "server error".to_string())
            }
            ServerError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "server error".to_string())
            }
        }
    }

}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        let body = Json(json!({
            "error": ErrorEnvelope {
                code: status.as_u16(),
                message,
            },
        }));

        (status, body).into_response()
    }
}
