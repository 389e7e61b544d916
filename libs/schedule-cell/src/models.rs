use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::time::{wall_clock, wall_clock_opt};
use shared_store::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateScheduleRequest {
    pub dentist_id: Uuid,
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: u8,
    #[serde(with = "wall_clock")]
    pub start_time: NaiveTime,
    #[serde(with = "wall_clock")]
    pub end_time: NaiveTime,
    pub is_available: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateScheduleRequest {
    pub day_of_week: Option<u8>,
    #[serde(default, with = "wall_clock_opt")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "wall_clock_opt")]
    pub end_time: Option<NaiveTime>,
    pub is_available: Option<bool>,
}

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Schedule template not found")]
    NotFound,

    #[error("Day of week must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    InvalidDayOfWeek(u8),

    #[error("Invalid availability window: {0}")]
    InvalidInterval(String),

    #[error("A schedule template already exists for this dentist and weekday")]
    DuplicateTemplate,

    #[error("Storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ScheduleError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => ScheduleError::NotFound,
            StoreError::AlreadyExists(_) => ScheduleError::DuplicateTemplate,
            other => ScheduleError::Store(other),
        }
    }
}
