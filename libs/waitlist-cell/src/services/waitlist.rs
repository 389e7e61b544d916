use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use shared_models::{WaitlistEntry, WaitlistStatus};
use shared_store::WaitlistStore;

use crate::models::{CreateWaitlistRequest, UpdateWaitlistRequest, WaitlistError};

pub struct WaitlistService {
    store: Arc<dyn WaitlistStore>,
}

impl WaitlistService {
    pub fn new(store: Arc<dyn WaitlistStore>) -> Self {
        Self { store }
    }

    /// New entries always start pending.
    pub async fn create(
        &self,
        request: CreateWaitlistRequest,
    ) -> Result<WaitlistEntry, WaitlistError> {
        debug!("Adding patient {} to waitlist", request.patient_id);

        let entry = WaitlistEntry {
            id: Uuid::new_v4(),
            patient_id: request.patient_id,
            clinic_id: request.clinic_id,
            preferred_dentist_id: request.preferred_dentist_id,
            requested_date: request.requested_date,
            notes: request.notes,
            status: WaitlistStatus::Pending,
            created_at: Utc::now(),
        };

        Ok(self.store.insert(entry).await?)
    }

    pub async fn list_for_clinic(
        &self,
        clinic_id: Uuid,
    ) -> Result<Vec<WaitlistEntry>, WaitlistError> {
        Ok(self.store.list_for_clinic(clinic_id).await?)
    }

    /// Update notes and/or move the entry through pending -> fulfilled /
    /// cancelled. Fulfilled and cancelled entries accept no further changes
    /// of status.
    pub async fn update(
        &self,
        entry_id: Uuid,
        request: UpdateWaitlistRequest,
    ) -> Result<WaitlistEntry, WaitlistError> {
        let mut entry = self
            .store
            .get(entry_id)
            .await?
            .ok_or(WaitlistError::NotFound)?;

        if let Some(raw) = request.status.as_deref() {
            let next = WaitlistStatus::from_str(raw)
                .map_err(|_| WaitlistError::InvalidStatus(raw.to_string()))?;
            if next != entry.status {
                if entry.status.is_terminal() || next == WaitlistStatus::Pending {
                    return Err(WaitlistError::InvalidTransition {
                        from: entry.status,
                        to: next,
                    });
                }
                entry.status = next;
                info!("Waitlist entry {} moved to {}", entry.id, entry.status);
            }
        }
        if let Some(notes) = request.notes {
            entry.notes = Some(notes);
        }

        Ok(self.store.update(entry).await?)
    }
}
