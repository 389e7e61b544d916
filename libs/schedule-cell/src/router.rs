use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers;
use crate::services::schedule::ScheduleService;

pub fn schedule_routes(service: Arc<ScheduleService>) -> Router {
    Router::new()
        .route("/", post(handlers::create_schedule))
        .route("/{schedule_id}", patch(handlers::update_schedule))
        .route("/dentists/{dentist_id}", get(handlers::list_dentist_schedules))
        .with_state(service)
}
