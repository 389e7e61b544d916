use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::json;

use appointment_cell::router::appointment_routes;
use appointment_cell::BookingService;
use schedule_cell::router::schedule_routes;
use schedule_cell::ScheduleService;
use waitlist_cell::router::waitlist_routes;
use waitlist_cell::WaitlistService;

pub fn create_router(
    schedules: Arc<ScheduleService>,
    booking: Arc<BookingService>,
    waitlist: Arc<WaitlistService>,
) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic scheduling API is running!" }))
        .route("/health", get(health))
        .nest("/api/schedules", schedule_routes(schedules))
        .nest("/api/appointments", appointment_routes(booking))
        .nest("/api/waitlist", waitlist_routes(waitlist))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
