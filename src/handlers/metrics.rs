// Metrics endpoint

use crate::core::error::MonitoringError;
use crate::core::state::AppState;
use crate::utils::auth::constant_time_eq;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct MetricsQuery {
    pub api_key: String,
}

/// Registration and login counters plus the registered user count.
///
/// GET /metrics?api_key=<key>
pub async fn metrics_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MetricsQuery>,
) -> Result<Response, MonitoringError> {
    let expected = state
        .config
        .monitoring
        .api_key
        .as_deref()
        .ok_or(MonitoringError::Disabled)?;

    if !constant_time_eq(&params.api_key, expected) {
        warn!("Unauthorized metrics access attempt");
        return Err(MonitoringError::InvalidApiKey);
    }

    let snapshot = state.metrics.get_snapshot(&state.credentials);

    Ok((StatusCode::OK, Json(snapshot)).into_response())
}
