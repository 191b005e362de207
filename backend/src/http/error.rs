//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, warn};

use super::decode::DecodeError;
use crate::adapter::AdapterError;
use crate::mapping::MapError;
use crate::models::ErrorResponse;

/// Application error type for HTTP handlers.
///
/// The `Display` text is the `message` of the error body.
#[derive(Debug, Error)]
pub enum AppError {
    /// Body is not a JSON object
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// Body does not have the expected shape
    #[error("Invalid JSON request")]
    InvalidRequest,
    #[error("Missing device identification")]
    MissingDeviceIdentification,
    #[error("Wrong integer conversion on device set index")]
    DeviceSetIndex,
    #[error("Wrong integer conversion on channel index")]
    ChannelIndex,
    #[error("Invalid HTTP method")]
    MethodNotAllowed,
    #[error("Not found")]
    NotFound,
    /// No adapter installed
    #[error("Service not available")]
    ServiceUnavailable,
    /// Adapter failure, passed through verbatim
    #[error("{}", .0.body.message)]
    Adapter(#[from] AdapterError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Decode(_)
            | AppError::InvalidRequest
            | AppError::MissingDeviceIdentification
            | AppError::DeviceSetIndex
            | AppError::ChannelIndex => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::ServiceUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Adapter(e) => match StatusCode::from_u16(e.status) {
                Ok(code) if code.is_client_error() || code.is_server_error() => code,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl From<MapError> for AppError {
    fn from(err: MapError) -> Self {
        debug!("request validation failed: {}", err);
        match err {
            MapError::MissingDeviceIdentification => AppError::MissingDeviceIdentification,
            _ => AppError::InvalidRequest,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Adapter(e) => e.body,
            other => ErrorResponse::new(other.to_string()),
        };

        if status.is_server_error() {
            warn!("{} {}", status.as_u16(), body.message);
        }

        (status, Json(body)).into_response()
    }
}
