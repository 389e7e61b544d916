use std::str::FromStr;

use tracing::{debug, warn};

use shared_models::AppointmentStatus;

use crate::models::SchedulingError;

/// Booking-state machine. The status field is a closed enum and every
/// transition goes through the table below; there is no other way to move
/// an appointment between states.
pub struct AppointmentLifecycle;

impl AppointmentLifecycle {
    pub fn new() -> Self {
        Self
    }

    /// Valid next statuses for a given current status.
    pub fn valid_transitions(&self, current: AppointmentStatus) -> &'static [AppointmentStatus] {
        match current {
            AppointmentStatus::Scheduled => &[
                AppointmentStatus::Confirmed,
                AppointmentStatus::Cancelled,
                AppointmentStatus::Completed,
            ],
            AppointmentStatus::Confirmed => {
                &[AppointmentStatus::Cancelled, AppointmentStatus::Completed]
            }
            // Terminal states - no transitions allowed
            AppointmentStatus::Cancelled => &[],
            AppointmentStatus::Completed => &[],
        }
    }

    pub fn validate_transition(
        &self,
        current: AppointmentStatus,
        next: AppointmentStatus,
    ) -> Result<(), SchedulingError> {
        debug!("Validating status transition {} -> {}", current, next);

        if !self.valid_transitions(current).contains(&next) {
            warn!("Invalid status transition attempted: {} -> {}", current, next);
            return Err(SchedulingError::InvalidTransition {
                from: current,
                to: next,
            });
        }

        Ok(())
    }

    /// Parse an inbound status string. Unknown values are a structured
    /// failure rather than a deserialization error.
    pub fn parse_status(&self, raw: &str) -> Result<AppointmentStatus, SchedulingError> {
        AppointmentStatus::from_str(raw)
            .map_err(|_| SchedulingError::InvalidStatus(raw.to_string()))
    }

    /// New appointments always start scheduled. A caller that supplies an
    /// explicit initial status is only accepted when it names exactly that.
    pub fn validate_initial_status(&self, raw: Option<&str>) -> Result<(), SchedulingError> {
        match raw {
            None => Ok(()),
            Some(raw) => {
                let status = self.parse_status(raw)?;
                if status != AppointmentStatus::Scheduled {
                    return Err(SchedulingError::InvalidStatus(raw.to_string()));
                }
                Ok(())
            }
        }
    }
}

impl Default for AppointmentLifecycle {
    fn default() -> Self {
        Self::new()
    }
}
