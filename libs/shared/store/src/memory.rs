use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use shared_models::{Appointment, ScheduleTemplate, WaitlistEntry};

use crate::{AppointmentStore, ScheduleStore, StoreError, WaitlistStore};

/// Map-backed store. Suitable for tests and single-process deployments;
/// all serialization beyond per-map consistency is the caller's concern
/// (the booking service holds its own per-day locks).
#[derive(Default)]
pub struct MemoryStore {
    schedules: RwLock<HashMap<Uuid, ScheduleTemplate>>,
    appointments: RwLock<HashMap<Uuid, Appointment>>,
    waitlist: RwLock<HashMap<Uuid, WaitlistEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScheduleStore for MemoryStore {
    async fn get_template(&self, id: Uuid) -> Result<Option<ScheduleTemplate>, StoreError> {
        Ok(self.schedules.read().await.get(&id).cloned())
    }

    async fn find_template(
        &self,
        dentist_id: Uuid,
        day_of_week: u8,
    ) -> Result<Option<ScheduleTemplate>, StoreError> {
        Ok(self
            .schedules
            .read()
            .await
            .values()
            .find(|t| t.dentist_id == dentist_id && t.day_of_week == day_of_week)
            .cloned())
    }

    async fn list_templates(&self, dentist_id: Uuid) -> Result<Vec<ScheduleTemplate>, StoreError> {
        let mut templates: Vec<ScheduleTemplate> = self
            .schedules
            .read()
            .await
            .values()
            .filter(|t| t.dentist_id == dentist_id)
            .cloned()
            .collect();
        templates.sort_by_key(|t| (t.day_of_week, t.start_time));
        Ok(templates)
    }

    async fn insert_template(
        &self,
        template: ScheduleTemplate,
    ) -> Result<ScheduleTemplate, StoreError> {
        let mut schedules = self.schedules.write().await;
        let duplicate = schedules.values().any(|t| {
            t.dentist_id == template.dentist_id && t.day_of_week == template.day_of_week
        });
        if duplicate {
            return Err(StoreError::AlreadyExists(format!(
                "schedule template for dentist {} on weekday {}",
                template.dentist_id, template.day_of_week
            )));
        }
        schedules.insert(template.id, template.clone());
        Ok(template)
    }

    async fn update_template(
        &self,
        template: ScheduleTemplate,
    ) -> Result<ScheduleTemplate, StoreError> {
        let mut schedules = self.schedules.write().await;
        if !schedules.contains_key(&template.id) {
            return Err(StoreError::NotFound);
        }
        let duplicate = schedules.values().any(|t| {
            t.id != template.id
                && t.dentist_id == template.dentist_id
                && t.day_of_week == template.day_of_week
        });
        if duplicate {
            return Err(StoreError::AlreadyExists(format!(
                "schedule template for dentist {} on weekday {}",
                template.dentist_id, template.day_of_week
            )));
        }
        schedules.insert(template.id, template.clone());
        Ok(template)
    }
}

#[async_trait]
impl AppointmentStore for MemoryStore {
    async fn get(&self, id: Uuid) -> Result<Option<Appointment>, StoreError> {
        Ok(self.appointments.read().await.get(&id).cloned())
    }

    async fn list_for_day(
        &self,
        dentist_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, StoreError> {
        let mut appointments: Vec<Appointment> = self
            .appointments
            .read()
            .await
            .values()
            .filter(|a| a.dentist_id == dentist_id && a.start_time.date_naive() == date)
            .cloned()
            .collect();
        appointments.sort_by_key(|a| a.start_time);
        Ok(appointments)
    }

    async fn list_for_dentist(&self, dentist_id: Uuid) -> Result<Vec<Appointment>, StoreError> {
        let mut appointments: Vec<Appointment> = self
            .appointments
            .read()
            .await
            .values()
            .filter(|a| a.dentist_id == dentist_id)
            .cloned()
            .collect();
        appointments.sort_by_key(|a| a.start_time);
        Ok(appointments)
    }

    async fn list_for_patient(&self, patient_id: Uuid) -> Result<Vec<Appointment>, StoreError> {
        let mut appointments: Vec<Appointment> = self
            .appointments
            .read()
            .await
            .values()
            .filter(|a| a.patient_id == patient_id)
            .cloned()
            .collect();
        appointments.sort_by_key(|a| a.start_time);
        Ok(appointments)
    }

    async fn insert(&self, appointment: Appointment) -> Result<Appointment, StoreError> {
        let mut appointments = self.appointments.write().await;
        if appointments.contains_key(&appointment.id) {
            return Err(StoreError::AlreadyExists(format!(
                "appointment {}",
                appointment.id
            )));
        }
        appointments.insert(appointment.id, appointment.clone());
        Ok(appointment)
    }

    async fn update(&self, appointment: Appointment) -> Result<Appointment, StoreError> {
        let mut appointments = self.appointments.write().await;
        if !appointments.contains_key(&appointment.id) {
            return Err(StoreError::NotFound);
        }
        appointments.insert(appointment.id, appointment.clone());
        Ok(appointment)
    }
}

#[async_trait]
impl WaitlistStore for MemoryStore {
    async fn get(&self, id: Uuid) -> Result<Option<WaitlistEntry>, StoreError> {
        Ok(self.waitlist.read().await.get(&id).cloned())
    }

    async fn list_for_clinic(&self, clinic_id: Uuid) -> Result<Vec<WaitlistEntry>, StoreError> {
        let mut entries: Vec<WaitlistEntry> = self
            .waitlist
            .read()
            .await
            .values()
            .filter(|e| e.clinic_id == clinic_id)
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.created_at);
        Ok(entries)
    }

    async fn insert(&self, entry: WaitlistEntry) -> Result<WaitlistEntry, StoreError> {
        self.waitlist.write().await.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn update(&self, entry: WaitlistEntry) -> Result<WaitlistEntry, StoreError> {
        let mut waitlist = self.waitlist.write().await;
        if !waitlist.contains_key(&entry.id) {
            return Err(StoreError::NotFound);
        }
        waitlist.insert(entry.id, entry.clone());
        Ok(entry)
    }
}
