use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub clinic_id: Uuid,
    pub preferred_dentist_id: Option<Uuid>,
    pub requested_date: NaiveDate,
    pub notes: Option<String>,
    pub status: WaitlistStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WaitlistStatus {
    Pending,
    Fulfilled,
    Cancelled,
}

impl WaitlistStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, WaitlistStatus::Fulfilled | WaitlistStatus::Cancelled)
    }
}

impl fmt::Display for WaitlistStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitlistStatus::Pending => write!(f, "pending"),
            WaitlistStatus::Fulfilled => write!(f, "fulfilled"),
            WaitlistStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for WaitlistStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(WaitlistStatus::Pending),
            "fulfilled" => Ok(WaitlistStatus::Fulfilled),
            "cancelled" => Ok(WaitlistStatus::Cancelled),
            _ => Err(()),
        }
    }
}
