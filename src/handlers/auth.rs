use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::auth::{AuthResponse, CredentialsRequest};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Register a new account
///
/// POST /auth/register  {"username": "...", "password": "..."}
#[instrument(skip_all)]
pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.inspect_err(|e| {
        warn!(error = %e, "Rejected malformed registration body");
        state.metrics.increment_rejected_registrations();
    })?;

    let user = state
        .credentials
        .register(request.username.as_deref(), request.password.as_deref())
        .inspect_err(|e| {
            warn!(
                username = request.username.as_deref().unwrap_or_default(),
                reason = %e,
                "Registration rejected"
            );
            state.metrics.increment_rejected_registrations();
        })?;

    state.metrics.increment_registrations();
    info!(user_id = user.id, username = %user.username, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "Registration successful".to_string(),
            user,
        }),
    )
        .into_response())
}

/// Check a username/password pair
///
/// POST /auth/login  {"username": "...", "password": "..."}
#[instrument(skip_all)]
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.inspect_err(|e| {
        warn!(error = %e, "Rejected malformed login body");
        state.metrics.increment_failed_logins();
    })?;

    let user = state
        .credentials
        .authenticate(request.username.as_deref(), request.password.as_deref())
        .inspect_err(|_| {
            warn!(
                username = request.username.as_deref().unwrap_or_default(),
                "Login failed"
            );
            state.metrics.increment_failed_logins();
        })?;

    state.metrics.increment_logins();
    info!(user_id = user.id, username = %user.username, "User logged in");

    Ok((
        StatusCode::OK,
        Json(AuthResponse {
            message: "Login successful".to_string(),
            user,
        }),
    )
        .into_response())
}
