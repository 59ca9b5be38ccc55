// Centralized error handling for the auth service

use crate::models::auth::ErrorResponse;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Failures raised by the credential service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// Malformed input: blank or too-short username/password
    #[error("{0}")]
    Validation(&'static str),

    #[error("username already taken")]
    Conflict,

    /// Unknown user and wrong password share this variant so the message
    /// never reveals which one it was.
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Errors returned by the public HTTP endpoints
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<CredentialError> for ApiError {
    fn from(err: CredentialError) -> Self {
        let message = capitalize(&err.to_string());
        match err {
            CredentialError::Validation(_) | CredentialError::Conflict => ApiError::BadRequest(message),
            CredentialError::InvalidCredentials => ApiError::Unauthorized(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        (
            status,
            Json(ErrorResponse {
                message: self.to_string(),
                error: status.canonical_reason().unwrap_or("Error").to_string(),
                status_code: status.as_u16(),
            }),
        )
            .into_response()
    }
}

#[derive(Error, Debug)]
pub enum MonitoringError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Monitoring is not configured")]
    Disabled,
}

impl IntoResponse for MonitoringError {
    fn into_response(self) -> Response {
        // Both cases look the same from outside
        (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
