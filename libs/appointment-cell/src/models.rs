use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::AppointmentStatus;
use shared_store::StoreError;

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub patient_id: Uuid,
    pub dentist_id: Uuid,
    pub clinic_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i64,
    pub notes: Option<String>,
    pub is_emergency: Option<bool>,
    /// Accepted for wire compatibility; anything other than "scheduled"
    /// is rejected. New appointments always start scheduled.
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleAppointmentRequest {
    pub start_time: DateTime<Utc>,
    /// Defaults to the appointment's current length.
    pub duration_minutes: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AvailableSlotsQuery {
    pub dentist_id: Uuid,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct AvailableSlotsResponse {
    pub dentist_id: Uuid,
    pub date: NaiveDate,
    pub slot_duration_minutes: i64,
    pub slots: Vec<DateTime<Utc>>,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SchedulingError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Invalid appointment interval: {0}")]
    InvalidInterval(String),

    #[error("Unrecognized appointment status: {0}")]
    InvalidStatus(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },

    #[error("Appointment slot is no longer available")]
    SlotUnavailable,

    #[error("Concurrent booking in progress for this day, retry with a refreshed slot list")]
    ConcurrentBookingConflict,

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}
