use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{CreateWaitlistRequest, UpdateWaitlistRequest, WaitlistError, WaitlistQuery};
use crate::services::waitlist::WaitlistService;

impl From<WaitlistError> for AppError {
    fn from(e: WaitlistError) -> Self {
        match e {
            WaitlistError::NotFound => AppError::NotFound(e.to_string()),
            WaitlistError::InvalidStatus(_) => AppError::BadRequest(e.to_string()),
            WaitlistError::InvalidTransition { .. } => AppError::Conflict(e.to_string()),
            WaitlistError::Store(inner) => AppError::Internal(inner.to_string()),
        }
    }
}

#[axum::debug_handler]
pub async fn list_waitlist(
    State(service): State<Arc<WaitlistService>>,
    Query(query): Query<WaitlistQuery>,
) -> Result<Json<Value>, AppError> {
    let entries = service.list_for_clinic(query.clinic_id).await?;

    Ok(Json(json!(entries)))
}

#[axum::debug_handler]
pub async fn create_waitlist_entry(
    State(service): State<Arc<WaitlistService>>,
    Json(request): Json<CreateWaitlistRequest>,
) -> Result<Json<Value>, AppError> {
    let entry = service.create(request).await?;

    Ok(Json(json!({
        "success": true,
        "entry": entry
    })))
}

#[axum::debug_handler]
pub async fn update_waitlist_entry(
    State(service): State<Arc<WaitlistService>>,
    Path(entry_id): Path<Uuid>,
    Json(request): Json<UpdateWaitlistRequest>,
) -> Result<Json<Value>, AppError> {
    let entry = service.update(entry_id, request).await?;

    Ok(Json(json!({
        "success": true,
        "entry": entry
    })))
}
