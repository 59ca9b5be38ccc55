use crate::models::user::PublicUser;
use serde::{Deserialize, Serialize};

/// Body of `POST /auth/register` and `POST /auth/login`.
///
/// Both fields are optional at the wire level so a missing field reaches the
/// credential service and is reported as "is required" rather than being
/// rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl CredentialsRequest {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: PublicUser,
}

/// Error body shared by every failing endpoint
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    pub error: String,
    pub status_code: u16,
}
