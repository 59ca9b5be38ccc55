pub mod core {
    pub mod config;
    pub mod error;
    pub mod routes;
    pub mod state;
    pub mod tracing_init;
}

pub mod handlers {
    pub mod auth;
    pub mod fallback;
    pub mod health;
    pub mod metrics;
}

pub mod models {
    pub mod auth;
    pub mod user;
}

pub mod metrics {
    pub mod collector;
}

pub mod security {
    pub mod password;
}

pub mod services {
    pub mod credential_service;
}

pub mod stores {
    pub mod user_store;
}

pub mod utils {
    pub mod auth;
}
