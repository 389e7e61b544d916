use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{CreateScheduleRequest, ScheduleError, UpdateScheduleRequest};
use crate::services::schedule::ScheduleService;

impl From<ScheduleError> for AppError {
    fn from(e: ScheduleError) -> Self {
        match e {
            ScheduleError::NotFound => AppError::NotFound(e.to_string()),
            ScheduleError::InvalidDayOfWeek(_) | ScheduleError::InvalidInterval(_) => {
                AppError::BadRequest(e.to_string())
            }
            ScheduleError::DuplicateTemplate => AppError::Conflict(e.to_string()),
            ScheduleError::Store(inner) => AppError::Internal(inner.to_string()),
        }
    }
}

#[axum::debug_handler]
pub async fn create_schedule(
    State(service): State<Arc<ScheduleService>>,
    Json(request): Json<CreateScheduleRequest>,
) -> Result<Json<Value>, AppError> {
    let schedule = service.create(request).await?;

    Ok(Json(json!({
        "success": true,
        "schedule": schedule
    })))
}

#[axum::debug_handler]
pub async fn update_schedule(
    State(service): State<Arc<ScheduleService>>,
    Path(schedule_id): Path<Uuid>,
    Json(request): Json<UpdateScheduleRequest>,
) -> Result<Json<Value>, AppError> {
    let schedule = service.update(schedule_id, request).await?;

    Ok(Json(json!({
        "success": true,
        "schedule": schedule
    })))
}

#[axum::debug_handler]
pub async fn list_dentist_schedules(
    State(service): State<Arc<ScheduleService>>,
    Path(dentist_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let schedules = service.list_for_dentist(dentist_id).await?;

    Ok(Json(json!(schedules)))
}
