use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub slot_duration_minutes: i64,
    pub booking_lock_wait_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("CLINIC_API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("CLINIC_API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| {
                    warn!("CLINIC_API_PORT not set or invalid, using 3000");
                    3000
                }),
            slot_duration_minutes: env::var("SLOT_DURATION_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|d: &i64| *d > 0)
                .unwrap_or_else(|| {
                    warn!("SLOT_DURATION_MINUTES not set or invalid, using 30");
                    30
                }),
            booking_lock_wait_ms: env::var("BOOKING_LOCK_WAIT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| {
                    warn!("BOOKING_LOCK_WAIT_MS not set or invalid, using 5000");
                    5000
                }),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            slot_duration_minutes: 30,
            booking_lock_wait_ms: 5000,
        }
    }
}
