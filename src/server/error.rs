//! Errors reported by the HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use super::types::ErrorResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Body is not a JSON object with a `password` key.
    #[error("Password field is required")]
    MissingPassword,
    /// Detail is logged, never sent to the client.
    #[error("Internal server error")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingPassword => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::MissingPassword => tracing::warn!("Rejected request: {}", self),
            ApiError::Internal(detail) => tracing::error!("Internal error: {}", detail),
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
