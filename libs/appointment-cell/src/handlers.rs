use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{
    AvailableSlotsQuery, AvailableSlotsResponse, BookAppointmentRequest,
    RescheduleAppointmentRequest, SchedulingError, UpdateStatusRequest,
};
use crate::services::booking::BookingService;

impl From<SchedulingError> for AppError {
    fn from(e: SchedulingError) -> Self {
        match e {
            SchedulingError::NotFound => AppError::NotFound(e.to_string()),
            SchedulingError::InvalidInterval(_) | SchedulingError::InvalidStatus(_) => {
                AppError::BadRequest(e.to_string())
            }
            SchedulingError::InvalidTransition { .. }
            | SchedulingError::SlotUnavailable
            | SchedulingError::ConcurrentBookingConflict => AppError::Conflict(e.to_string()),
            SchedulingError::Store(inner) => AppError::Internal(inner.to_string()),
        }
    }
}

#[axum::debug_handler]
pub async fn get_available_slots(
    State(service): State<Arc<BookingService>>,
    Query(query): Query<AvailableSlotsQuery>,
) -> Result<Json<AvailableSlotsResponse>, AppError> {
    let slots = service.available_slots(query.dentist_id, query.date).await?;

    Ok(Json(AvailableSlotsResponse {
        dentist_id: query.dentist_id,
        date: query.date,
        slot_duration_minutes: service.slot_duration_minutes(),
        slots,
    }))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(service): State<Arc<BookingService>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = service.book(request).await?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment,
        "message": "Appointment booked successfully"
    })))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(service): State<Arc<BookingService>>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let appointment = service.get(appointment_id).await?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn get_patient_appointments(
    State(service): State<Arc<BookingService>>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let appointments = service.list_for_patient(patient_id).await?;

    Ok(Json(json!(appointments)))
}

#[axum::debug_handler]
pub async fn get_dentist_appointments(
    State(service): State<Arc<BookingService>>,
    Path(dentist_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let appointments = service.list_for_dentist(dentist_id).await?;

    Ok(Json(json!(appointments)))
}

#[axum::debug_handler]
pub async fn update_appointment_status(
    State(service): State<Arc<BookingService>>,
    Path(appointment_id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = service
        .transition_status(appointment_id, &request.status)
        .await?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment
    })))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(service): State<Arc<BookingService>>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let appointment = service.cancel(appointment_id).await?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment,
        "message": "Appointment cancelled"
    })))
}

#[axum::debug_handler]
pub async fn reschedule_appointment(
    State(service): State<Arc<BookingService>>,
    Path(appointment_id): Path<Uuid>,
    Json(request): Json<RescheduleAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = service.reschedule(appointment_id, request).await?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment,
        "message": "Appointment rescheduled"
    })))
}
