//! Errors raised by the host service around the reactor.
//!
//! Wrong codes are not errors; they are ordinary transitions. [`AppError`]
//! only covers failures of the service itself and converts into an HTTP
//! response with a JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A thread panicked while holding the reactor lock
    #[error("reactor state lock poisoned: {0}")]
    StatePoisoned(String),
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Self::StatePoisoned(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::StatePoisoned(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
