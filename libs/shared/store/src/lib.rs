//! Storage interfaces for the scheduling service.
//!
//! The cells only ever see these traits; the backing mechanism is chosen at
//! wiring time. [`MemoryStore`] is the only implementation in this workspace.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use shared_models::{Appointment, ScheduleTemplate, WaitlistEntry};

pub mod error;
pub mod memory;

pub use error::StoreError;
pub use memory::MemoryStore;

/// Read/write access to weekly availability templates.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    async fn get_template(&self, id: Uuid) -> Result<Option<ScheduleTemplate>, StoreError>;

    /// The single template for (dentist, weekday), if one exists. The insert
    /// path guarantees there is at most one.
    async fn find_template(
        &self,
        dentist_id: Uuid,
        day_of_week: u8,
    ) -> Result<Option<ScheduleTemplate>, StoreError>;

    /// All templates for a dentist, ordered by weekday then start time.
    async fn list_templates(&self, dentist_id: Uuid) -> Result<Vec<ScheduleTemplate>, StoreError>;

    /// Fails with [`StoreError::AlreadyExists`] when a template for the same
    /// (dentist, weekday) is present.
    async fn insert_template(
        &self,
        template: ScheduleTemplate,
    ) -> Result<ScheduleTemplate, StoreError>;

    async fn update_template(
        &self,
        template: ScheduleTemplate,
    ) -> Result<ScheduleTemplate, StoreError>;
}

/// Read/write access to appointments.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<Appointment>, StoreError>;

    /// All of a dentist's appointments whose start falls on the given
    /// calendar day, ascending by start time. No status filtering here:
    /// excluding cancelled rows is the scheduling core's decision.
    async fn list_for_day(
        &self,
        dentist_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, StoreError>;

    async fn list_for_dentist(&self, dentist_id: Uuid) -> Result<Vec<Appointment>, StoreError>;

    async fn list_for_patient(&self, patient_id: Uuid) -> Result<Vec<Appointment>, StoreError>;

    async fn insert(&self, appointment: Appointment) -> Result<Appointment, StoreError>;

    async fn update(&self, appointment: Appointment) -> Result<Appointment, StoreError>;
}

/// Read/write access to the clinic waitlist.
#[async_trait]
pub trait WaitlistStore: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<WaitlistEntry>, StoreError>;

    async fn list_for_clinic(&self, clinic_id: Uuid) -> Result<Vec<WaitlistEntry>, StoreError>;

    async fn insert(&self, entry: WaitlistEntry) -> Result<WaitlistEntry, StoreError>;

    async fn update(&self, entry: WaitlistEntry) -> Result<WaitlistEntry, StoreError>;
}
