use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::domain::DomainError;

/// Body of every failed API call.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MissingInput(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            DomainError::MissingCredential(msg) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            DomainError::Upstream(msg) | DomainError::Internal(msg) => {
                error!("Error: {msg}");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("An error occurred: {msg}"),
                )
            }
        }
    }
}

/// An undecodable body falls into the same catch-all as an upstream failure.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        DomainError::internal(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}
