use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use schedule_cell::ScheduleService;
use shared_config::AppConfig;
use shared_models::{Appointment, AppointmentStatus};
use shared_store::AppointmentStore;

use crate::models::{BookAppointmentRequest, RescheduleAppointmentRequest, SchedulingError};
use crate::services::lifecycle::AppointmentLifecycle;
use crate::services::locks::DayLockTable;
use crate::services::slots::{filter_available, slot_is_blocked, SlotSequence};

/// The scheduling core: slot computation plus the serialized write paths
/// (booking, reschedule, status transitions) against the injected store.
pub struct BookingService {
    schedules: Arc<ScheduleService>,
    appointments: Arc<dyn AppointmentStore>,
    lifecycle: AppointmentLifecycle,
    locks: DayLockTable,
    slot_duration: Duration,
    lock_wait: StdDuration,
}

impl BookingService {
    pub fn new(
        schedules: Arc<ScheduleService>,
        appointments: Arc<dyn AppointmentStore>,
        config: &AppConfig,
    ) -> Self {
        Self {
            schedules,
            appointments,
            lifecycle: AppointmentLifecycle::new(),
            locks: DayLockTable::new(),
            slot_duration: Duration::minutes(config.slot_duration_minutes),
            lock_wait: StdDuration::from_millis(config.booking_lock_wait_ms),
        }
    }

    pub fn slot_duration_minutes(&self) -> i64 {
        self.slot_duration.num_minutes()
    }

    /// Free slot starts for a dentist on a calendar date: resolve the weekly
    /// template, walk the window in fixed steps, drop candidates that collide
    /// with a non-cancelled appointment. Recomputed from store state on every
    /// call; no caching.
    #[instrument(skip(self))]
    pub async fn available_slots(
        &self,
        dentist_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<DateTime<Utc>>, SchedulingError> {
        let Some(template) = self.schedules.resolve_for_date(dentist_id, date).await? else {
            debug!("No availability for dentist {} on {}", dentist_id, date);
            return Ok(vec![]);
        };

        let window_start = date.and_time(template.start_time).and_utc();
        let window_end = date.and_time(template.end_time).and_utc();
        let booked = self.appointments.list_for_day(dentist_id, date).await?;

        let slots = filter_available(
            SlotSequence::new(window_start, window_end, self.slot_duration),
            self.slot_duration,
            &booked,
        );
        debug!("Found {} available slots", slots.len());
        Ok(slots)
    }

    /// Book an appointment. The overlap check is re-run at commit time under
    /// the dentist-day lock, so two racing requests for the same interval
    /// cannot both pass it.
    #[instrument(skip(self, request), fields(dentist_id = %request.dentist_id))]
    pub async fn book(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, SchedulingError> {
        self.lifecycle
            .validate_initial_status(request.status.as_deref())?;
        let duration = positive_minutes(request.duration_minutes)?;

        let start = request.start_time;
        let end = start + duration;
        let date = start.date_naive();

        let _day = self
            .locks
            .acquire(request.dentist_id, date, self.lock_wait)
            .await?;

        let booked = self.appointments.list_for_day(request.dentist_id, date).await?;
        if slot_is_blocked(start, duration, &booked) {
            warn!("Booking rejected: slot {} already taken", start);
            return Err(SchedulingError::SlotUnavailable);
        }

        let now = Utc::now();
        let appointment = Appointment {
            id: Uuid::new_v4(),
            patient_id: request.patient_id,
            dentist_id: request.dentist_id,
            clinic_id: request.clinic_id,
            start_time: start,
            end_time: end,
            status: AppointmentStatus::Scheduled,
            notes: request.notes,
            is_emergency: request.is_emergency.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };

        let created = self.appointments.insert(appointment).await?;
        info!("Appointment {} booked for {}", created.id, created.start_time);
        Ok(created)
    }

    /// Overwrite an appointment's time bounds. The record keeps its identity
    /// but re-enters the state machine at scheduled, so terminal appointments
    /// cannot be moved. Validated against the target day's interval set under
    /// that day's lock, excluding the appointment itself.
    #[instrument(skip(self, request))]
    pub async fn reschedule(
        &self,
        appointment_id: Uuid,
        request: RescheduleAppointmentRequest,
    ) -> Result<Appointment, SchedulingError> {
        let mut appointment = self
            .appointments
            .get(appointment_id)
            .await?
            .ok_or(SchedulingError::NotFound)?;

        if appointment.status.is_terminal() {
            return Err(SchedulingError::InvalidTransition {
                from: appointment.status,
                to: AppointmentStatus::Scheduled,
            });
        }

        let duration = positive_minutes(
            request
                .duration_minutes
                .unwrap_or_else(|| appointment.duration().num_minutes()),
        )?;
        let start = request.start_time;
        let end = start + duration;
        let date = start.date_naive();

        let _day = self
            .locks
            .acquire(appointment.dentist_id, date, self.lock_wait)
            .await?;

        let booked: Vec<Appointment> = self
            .appointments
            .list_for_day(appointment.dentist_id, date)
            .await?
            .into_iter()
            .filter(|a| a.id != appointment_id)
            .collect();
        if slot_is_blocked(start, duration, &booked) {
            return Err(SchedulingError::SlotUnavailable);
        }

        appointment.start_time = start;
        appointment.end_time = end;
        appointment.status = AppointmentStatus::Scheduled;
        appointment.updated_at = Utc::now();

        let updated = self.appointments.update(appointment).await?;
        info!("Appointment {} rescheduled to {}", updated.id, updated.start_time);
        Ok(updated)
    }

    /// Move an appointment through the state machine. Serialized on the
    /// appointment's day because cancellation changes that day's conflict
    /// set for concurrent bookings.
    #[instrument(skip(self))]
    pub async fn transition_status(
        &self,
        appointment_id: Uuid,
        raw_status: &str,
    ) -> Result<Appointment, SchedulingError> {
        let next = self.lifecycle.parse_status(raw_status)?;

        let mut appointment = self
            .appointments
            .get(appointment_id)
            .await?
            .ok_or(SchedulingError::NotFound)?;

        let date = appointment.start_time.date_naive();
        let _day = self
            .locks
            .acquire(appointment.dentist_id, date, self.lock_wait)
            .await?;

        self.lifecycle.validate_transition(appointment.status, next)?;
        appointment.status = next;
        appointment.updated_at = Utc::now();

        let updated = self.appointments.update(appointment).await?;
        info!("Appointment {} transitioned to {}", updated.id, updated.status);
        Ok(updated)
    }

    pub async fn cancel(&self, appointment_id: Uuid) -> Result<Appointment, SchedulingError> {
        self.transition_status(appointment_id, "cancelled").await
    }

    pub async fn get(&self, appointment_id: Uuid) -> Result<Appointment, SchedulingError> {
        self.appointments
            .get(appointment_id)
            .await?
            .ok_or(SchedulingError::NotFound)
    }

    pub async fn list_for_patient(
        &self,
        patient_id: Uuid,
    ) -> Result<Vec<Appointment>, SchedulingError> {
        Ok(self.appointments.list_for_patient(patient_id).await?)
    }

    pub async fn list_for_dentist(
        &self,
        dentist_id: Uuid,
    ) -> Result<Vec<Appointment>, SchedulingError> {
        Ok(self.appointments.list_for_dentist(dentist_id).await?)
    }
}

fn positive_minutes(minutes: i64) -> Result<Duration, SchedulingError> {
    if minutes <= 0 {
        return Err(SchedulingError::InvalidInterval(format!(
            "duration must be positive, got {} minutes",
            minutes
        )));
    }
    Ok(Duration::minutes(minutes))
}
