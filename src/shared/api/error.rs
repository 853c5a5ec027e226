// src/shared/api/error.rs
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use tracing::{debug, error};

use crate::shared::storage::StorageFault;

const DEFAULT_MESSAGE: &str = "Server Error";

/// The Error Value: one human-readable message plus the status to answer with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: StatusCode,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

/// Anything a handler, extractor or use case can fail with.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Explicitly constructed Error Value.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Classified storage fault, translated by [`AppError::normalize`].
    #[error(transparent)]
    Storage(#[from] StorageFault),

    /// Anything else. Never shown to the client.
    #[error(transparent)]
    Unrecovered(#[from] anyhow::Error),
}

pub type ApiResult = Result<HttpResponse, AppError>;

impl AppError {
    pub fn unrecovered(message: impl std::fmt::Display) -> Self {
        AppError::Unrecovered(anyhow::anyhow!("{}", message))
    }

    /// Turn any failure into the Error Value the client will see.
    pub fn normalize(&self) -> ApiError {
        match self {
            AppError::Api(value) => value.clone(),
            AppError::Storage(StorageFault::MalformedId(_)) => {
                ApiError::not_found("Resource not found")
            }
            AppError::Storage(StorageFault::Duplicate(_)) => {
                ApiError::conflict("Duplicate field value entered")
            }
            AppError::Storage(StorageFault::Validation(messages)) => {
                ApiError::bad_request(messages.join(", "))
            }
            AppError::Storage(StorageFault::Unavailable(_)) | AppError::Unrecovered(_) => {
                ApiError::server_error(DEFAULT_MESSAGE)
            }
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Unrecovered(err.into())
    }
}

#[derive(Serialize)]
struct FailureEnvelope<'a> {
    success: bool,
    error: &'a str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.normalize().status
    }

    fn error_response(&self) -> HttpResponse {
        let value = self.normalize();

        if value.status.is_server_error() {
            error!(error = ?self, "Request failed: {}", self);
        } else {
            debug!(status = value.status.as_u16(), "Request rejected: {}", self);
        }

        let message = if value.message.trim().is_empty() {
            DEFAULT_MESSAGE
        } else {
            value.message.as_str()
        };

        HttpResponse::build(value.status).json(FailureEnvelope {
            success: false,
            error: message,
        })
    }
}
