//! Handler errors. Upload and preview failures never get here; they are
//! rendered into the page.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Malformed upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Unknown module: {0}")]
    UnknownModule(String),

    #[error("Session expired")]
    SessionExpired,

    #[error("Render task failed: {0}")]
    Render(#[from] tokio::task::JoinError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match &self {
            WebError::Template(_)      => StatusCode::INTERNAL_SERVER_ERROR,
            WebError::Multipart(e)     => e.status(),
            WebError::UnknownModule(_) => StatusCode::NOT_FOUND,
            WebError::SessionExpired   => StatusCode::INTERNAL_SERVER_ERROR,
            WebError::Render(_)        => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}
