use crate::services::credential_service::CredentialService;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Request counters for the auth endpoints
pub struct Metrics {
    pub registrations: AtomicU64,
    pub rejected_registrations: AtomicU64,
    pub logins: AtomicU64,
    pub failed_logins: AtomicU64,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, serde::Deserialize)]
pub struct MetricsSnapshot {
    pub registrations: u64,
    pub rejected_registrations: u64,
    pub logins: u64,
    pub failed_logins: u64,
    pub login_success_rate: f64,
    pub registered_users: usize,
    pub uptime_seconds: i64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            registrations: AtomicU64::new(0),
            rejected_registrations: AtomicU64::new(0),
            logins: AtomicU64::new(0),
            failed_logins: AtomicU64::new(0),
            start_time: Utc::now(),
        }
    }

    pub fn increment_registrations(&self) {
        self.registrations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rejected_registrations(&self) {
        self.rejected_registrations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_logins(&self) {
        self.logins.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_failed_logins(&self) {
        self.failed_logins.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self, credentials: &CredentialService) -> MetricsSnapshot {
        let logins = self.logins.load(Ordering::Relaxed);
        let failed_logins = self.failed_logins.load(Ordering::Relaxed);
        let attempts = logins + failed_logins;

        let login_success_rate = if attempts > 0 {
            (logins as f64 / attempts as f64) * 100.0
        } else {
            0.0
        };

        MetricsSnapshot {
            registrations: self.registrations.load(Ordering::Relaxed),
            rejected_registrations: self.rejected_registrations.load(Ordering::Relaxed),
            logins,
            failed_logins,
            login_success_rate,
            registered_users: credentials.registered_users(),
            uptime_seconds: (Utc::now() - self.start_time).num_seconds(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
