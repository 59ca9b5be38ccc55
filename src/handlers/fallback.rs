use crate::core::error::ApiError;
use axum::http::{Method, Uri};

/// 404 for every unmatched route, in the same body shape as other errors
pub async fn fallback_handler(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Cannot {} {}", method, uri.path()))
}
