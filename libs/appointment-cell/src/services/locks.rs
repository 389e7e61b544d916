use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use chrono::NaiveDate;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;
use uuid::Uuid;

use crate::models::SchedulingError;

/// Serializes writes per (dentist, calendar day). Each key gets its own
/// async mutex, so bookings for different dentists or different days never
/// contend with each other.
///
/// Entries are created on first use and kept for the table's lifetime; the
/// key space is bounded by dentists x days actually written to.
#[derive(Default)]
pub struct DayLockTable {
    entries: StdMutex<HashMap<(Uuid, NaiveDate), Arc<Mutex<()>>>>,
}

impl DayLockTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for a dentist-day, waiting at most `wait`. A timeout
    /// means another booking holds the day for longer than the budget.
    pub async fn acquire(
        &self,
        dentist_id: Uuid,
        date: NaiveDate,
        wait: Duration,
    ) -> Result<OwnedMutexGuard<()>, SchedulingError> {
        let entry = {
            let mut entries = self.entries.lock().expect("day lock table poisoned");
            entries
                .entry((dentist_id, date))
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        debug!("Acquiring day lock for dentist {} on {}", dentist_id, date);
        tokio::time::timeout(wait, entry.lock_owned())
            .await
            .map_err(|_| SchedulingError::ConcurrentBookingConflict)
    }
}
