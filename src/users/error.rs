//! Domain errors and their HTTP mapping.
//!
//! Every failure a store operation can produce is surfaced directly to the
//! caller as a status code plus a `{message}` JSON body. There is no
//! internal recovery path.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::http::response::ErrorBody;

/// Errors produced by user store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    /// Create was called without a usable name or email.
    #[error("name and email required")]
    MissingFields,

    /// The supplied email does not look like `local@domain.tld`.
    #[error("invalid email")]
    InvalidEmail,

    /// Another user already holds this email, compared case-insensitively.
    #[error("email already registered")]
    EmailTaken,

    /// No user exists with the referenced id.
    #[error("user not found")]
    NotFound,
}

impl UserError {
    /// HTTP status this error surfaces as.
    pub fn status(&self) -> StatusCode {
        match self {
            UserError::MissingFields | UserError::InvalidEmail => StatusCode::BAD_REQUEST,
            UserError::EmailTaken => StatusCode::CONFLICT,
            UserError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
