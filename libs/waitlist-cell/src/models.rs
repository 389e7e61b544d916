use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::WaitlistStatus;
use shared_store::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWaitlistRequest {
    pub patient_id: Uuid,
    pub clinic_id: Uuid,
    pub preferred_dentist_id: Option<Uuid>,
    pub requested_date: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWaitlistRequest {
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WaitlistQuery {
    pub clinic_id: Uuid,
}

#[derive(Debug, thiserror::Error)]
pub enum WaitlistError {
    #[error("Waitlist entry not found")]
    NotFound,

    #[error("Unrecognized waitlist status: {0}")]
    InvalidStatus(String),

    #[error("Invalid waitlist transition from {from} to {to}")]
    InvalidTransition {
        from: WaitlistStatus,
        to: WaitlistStatus,
    },

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}
