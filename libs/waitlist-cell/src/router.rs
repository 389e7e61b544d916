use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::handlers;
use crate::services::waitlist::WaitlistService;

pub fn waitlist_routes(service: Arc<WaitlistService>) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::list_waitlist).post(handlers::create_waitlist_entry),
        )
        .route("/{entry_id}", patch(handlers::update_waitlist_entry))
        .with_state(service)
}
