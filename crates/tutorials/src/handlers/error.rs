use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tutorials_core::storage::{store_error_to_status_code, StoreError};

use crate::service::ServiceError;

/// Error body returned by every failing route.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted: Option<usize>,
}

/// An error with an explicit status and client-facing message.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpError {
    pub status: StatusCode,
    pub message: String,
}

impl HttpError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

pub struct AppError(pub anyhow::Error);

fn store_status(err: &StoreError) -> StatusCode {
    StatusCode::from_u16(store_error_to_status_code(err))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();

        let (status, deleted) = if let Some(http_error) = self.0.downcast_ref::<HttpError>() {
            (http_error.status, None)
        } else if let Some(service_error) = self.0.downcast_ref::<ServiceError>() {
            match service_error {
                ServiceError::Validation(_) => (StatusCode::BAD_REQUEST, None),
                ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, None),
                ServiceError::Store(err) => (store_status(err), None),
                ServiceError::PartialDelete {
                    deleted, source, ..
                } => (store_status(source), Some(*deleted)),
            }
        } else if let Some(store_error) = self.0.downcast_ref::<StoreError>() {
            (store_status(store_error), None)
        } else {
            (StatusCode::INTERNAL_SERVER_ERROR, None)
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %message, "Request rejected");
        }

        error_response(status, message, deleted)
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Renders the JSON error body.
pub fn error_response(
    status: StatusCode,
    message: impl Into<String>,
    deleted: Option<usize>,
) -> Response {
    let body = ErrorBody {
        message: message.into(),
        deleted,
    };
    (status, Json(body)).into_response()
}
