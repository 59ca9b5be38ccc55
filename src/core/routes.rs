// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/auth/register", post(crate::handlers::auth::register_handler))
        .route("/auth/login", post(crate::handlers::auth::login_handler))
        .route("/health", get(crate::handlers::health::health_handler))

        // Requires monitoring.api_key
        .route("/metrics", get(crate::handlers::metrics::metrics_handler))

        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
