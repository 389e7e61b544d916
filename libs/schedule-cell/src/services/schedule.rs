use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, Utc};
use tracing::debug;
use uuid::Uuid;

use shared_models::schedule::day_of_week;
use shared_models::ScheduleTemplate;
use shared_store::{ScheduleStore, StoreError};

use crate::models::{CreateScheduleRequest, ScheduleError, UpdateScheduleRequest};

pub struct ScheduleService {
    store: Arc<dyn ScheduleStore>,
}

impl ScheduleService {
    pub fn new(store: Arc<dyn ScheduleStore>) -> Self {
        Self { store }
    }

    /// Create a weekly availability template for a dentist.
    pub async fn create(
        &self,
        request: CreateScheduleRequest,
    ) -> Result<ScheduleTemplate, ScheduleError> {
        debug!("Creating schedule template for dentist {}", request.dentist_id);

        validate_day_of_week(request.day_of_week)?;
        validate_window(request.start_time, request.end_time)?;

        let now = Utc::now();
        let template = ScheduleTemplate {
            id: Uuid::new_v4(),
            dentist_id: request.dentist_id,
            day_of_week: request.day_of_week,
            start_time: request.start_time,
            end_time: request.end_time,
            is_available: request.is_available.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };

        let created = self.store.insert_template(template).await?;
        debug!("Schedule template created with ID: {}", created.id);
        Ok(created)
    }

    /// Partial update of an existing template. Unset fields keep their
    /// current values; the merged window is re-validated.
    pub async fn update(
        &self,
        schedule_id: Uuid,
        request: UpdateScheduleRequest,
    ) -> Result<ScheduleTemplate, ScheduleError> {
        debug!("Updating schedule template {}", schedule_id);

        let mut template = self
            .store
            .get_template(schedule_id)
            .await?
            .ok_or(ScheduleError::NotFound)?;

        if let Some(day) = request.day_of_week {
            validate_day_of_week(day)?;
            template.day_of_week = day;
        }
        if let Some(start) = request.start_time {
            template.start_time = start;
        }
        if let Some(end) = request.end_time {
            template.end_time = end;
        }
        if let Some(available) = request.is_available {
            template.is_available = available;
        }
        validate_window(template.start_time, template.end_time)?;
        template.updated_at = Utc::now();

        Ok(self.store.update_template(template).await?)
    }

    pub async fn list_for_dentist(
        &self,
        dentist_id: Uuid,
    ) -> Result<Vec<ScheduleTemplate>, ScheduleError> {
        Ok(self.store.list_templates(dentist_id).await?)
    }

    /// Resolve the template governing a dentist's calendar date: derive the
    /// weekday (Sunday = 0) and look up the single matching template. Days
    /// without a template, and templates flagged unavailable, both resolve
    /// to "no availability".
    pub async fn resolve_for_date(
        &self,
        dentist_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<ScheduleTemplate>, StoreError> {
        let template = self
            .store
            .find_template(dentist_id, day_of_week(date))
            .await?;
        Ok(template.filter(|t| t.is_available))
    }
}

fn validate_day_of_week(day: u8) -> Result<(), ScheduleError> {
    if day > 6 {
        return Err(ScheduleError::InvalidDayOfWeek(day));
    }
    Ok(())
}

fn validate_window(start: NaiveTime, end: NaiveTime) -> Result<(), ScheduleError> {
    if start >= end {
        return Err(ScheduleError::InvalidInterval(format!(
            "start time {} must be before end time {}",
            start.format("%H:%M"),
            end.format("%H:%M")
        )));
    }
    Ok(())
}
