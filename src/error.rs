//! Request-level error types and their rendering into the response envelope.
//!
//! Every failure is represented as a typed [`AppError`] kind inside the core;
//! the human-readable description is produced only here, at the serialization
//! edge, when the error is converted into the shared `{"status": ...}` body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::status::StatusResponse;

#[derive(Debug)]
pub enum AppError {
    /// A query parameter could not be parsed.
    Parse { message: String },
    /// The backing store failed or was unreachable.
    Store { message: String },
}

impl AppError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Human-readable description placed into the `status` field.
    pub fn description(&self) -> &str {
        match self {
            AppError::Parse { message } => message,
            AppError::Store { message } => message,
        }
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        Self::Store {
            message: format!("store error: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Parse { message } => {
                tracing::debug!("request rejected: {message}");
            }
            AppError::Store { message } => {
                tracing::error!("{message}");
            }
        }

        // Failures share the response envelope of the success paths; only the
        // status text differs.
        (
            StatusCode::OK,
            Json(StatusResponse::failed(self.description())),
        )
            .into_response()
    }
}
