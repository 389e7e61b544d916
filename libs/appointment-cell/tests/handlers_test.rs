use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use appointment_cell::router::appointment_routes;
use appointment_cell::BookingService;
use schedule_cell::{CreateScheduleRequest, ScheduleService};
use shared_config::AppConfig;
use shared_models::time::parse_wall_clock;
use shared_store::MemoryStore;

async fn test_router() -> (Router, Uuid) {
    let store = Arc::new(MemoryStore::new());
    let schedules = Arc::new(ScheduleService::new(store.clone()));
    let booking = Arc::new(BookingService::new(
        schedules.clone(),
        store,
        &AppConfig::default(),
    ));

    let dentist_id = Uuid::new_v4();
    schedules
        .create(CreateScheduleRequest {
            dentist_id,
            day_of_week: 1,
            start_time: parse_wall_clock("09:00").unwrap(),
            end_time: parse_wall_clock("17:00").unwrap(),
            is_available: Some(true),
        })
        .await
        .expect("schedule creation failed");

    (appointment_routes(booking), dentist_id)
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("body is not JSON")
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn booking_body(dentist_id: Uuid, start: &str) -> Value {
    json!({
        "patient_id": Uuid::new_v4(),
        "dentist_id": dentist_id,
        "clinic_id": Uuid::new_v4(),
        "start_time": start,
        "duration_minutes": 30
    })
}

#[tokio::test]
async fn available_slots_endpoint_returns_the_full_open_day() {
    let (router, dentist_id) = test_router().await;

    let response = router
        .oneshot(
            Request::builder()
                .uri(format!(
                    "/available-slots?dentist_id={}&date=2024-03-18",
                    dentist_id
                ))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["slot_duration_minutes"], 30);
    assert_eq!(body["slots"].as_array().unwrap().len(), 16);
    assert_eq!(body["slots"][0], "2024-03-18T09:00:00Z");
}

#[tokio::test]
async fn booking_twice_yields_conflict_on_the_second_request() {
    let (router, dentist_id) = test_router().await;
    let body = booking_body(dentist_id, "2024-03-18T10:00:00Z");

    let first = router
        .clone()
        .oneshot(json_request("POST", "/", body.clone()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let first_body = response_json(first).await;
    assert_eq!(first_body["success"], true);
    assert_eq!(first_body["appointment"]["status"], "scheduled");

    let second = router
        .oneshot(json_request("POST", "/", body))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let second_body = response_json(second).await;
    assert!(second_body["error"].is_string());
}

#[tokio::test]
async fn invalid_duration_is_a_bad_request() {
    let (router, dentist_id) = test_router().await;
    let mut body = booking_body(dentist_id, "2024-03-18T10:00:00Z");
    body["duration_minutes"] = json!(-15);

    let response = router
        .oneshot(json_request("POST", "/", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_status_value_is_a_bad_request() {
    let (router, dentist_id) = test_router().await;

    let booked = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/",
            booking_body(dentist_id, "2024-03-18T10:00:00Z"),
        ))
        .await
        .unwrap();
    let appointment_id = response_json(booked).await["appointment"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = router
        .oneshot(json_request(
            "PATCH",
            &format!("/{}/status", appointment_id),
            json!({ "status": "no_show" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn transition_out_of_cancelled_is_a_conflict() {
    let (router, dentist_id) = test_router().await;

    let booked = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/",
            booking_body(dentist_id, "2024-03-18T10:00:00Z"),
        ))
        .await
        .unwrap();
    let appointment_id = response_json(booked).await["appointment"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let cancelled = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/{}/cancel", appointment_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(cancelled.status(), StatusCode::OK);

    let response = router
        .oneshot(json_request(
            "PATCH",
            &format!("/{}/status", appointment_id),
            json!({ "status": "confirmed" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn missing_appointment_is_not_found() {
    let (router, _) = test_router().await;

    let response = router
        .oneshot(
            Request::builder()
                .uri(format!("/{}", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
