// Application state (AppState)

use crate::core::config::Config;
use crate::metrics::collector::Metrics;
use crate::security::password::Base64Transform;
use crate::services::credential_service::CredentialService;
use crate::stores::user_store::UserStore;
use std::sync::Arc;

/// Shared application state
///
/// Built once at startup and dropped at shutdown; the user store lives
/// inside the credential service and goes away with it.
#[derive(Clone)]
pub struct AppState {
    /// Registration and login
    pub credentials: Arc<CredentialService>,

    pub metrics: Arc<Metrics>,

    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            credentials: Arc::new(CredentialService::new(UserStore::new(), Base64Transform)),
            metrics: Arc::new(Metrics::new()),
            config: Arc::new(config),
        }
    }
}
