use assert_matches::assert_matches;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use shared_models::time::parse_wall_clock;
use shared_models::{Appointment, AppointmentStatus, ScheduleTemplate};
use shared_store::{AppointmentStore, MemoryStore, ScheduleStore, StoreError};

fn at(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    date.and_hms_opt(hour, minute, 0).unwrap().and_utc()
}

fn appointment(dentist_id: Uuid, start: DateTime<Utc>, end: DateTime<Utc>) -> Appointment {
    let now = Utc::now();
    Appointment {
        id: Uuid::new_v4(),
        patient_id: Uuid::new_v4(),
        dentist_id,
        clinic_id: Uuid::new_v4(),
        start_time: start,
        end_time: end,
        status: AppointmentStatus::Scheduled,
        notes: None,
        is_emergency: false,
        created_at: now,
        updated_at: now,
    }
}

fn template(dentist_id: Uuid, day_of_week: u8) -> ScheduleTemplate {
    let now = Utc::now();
    ScheduleTemplate {
        id: Uuid::new_v4(),
        dentist_id,
        day_of_week,
        start_time: parse_wall_clock("09:00").unwrap(),
        end_time: parse_wall_clock("17:00").unwrap(),
        is_available: true,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn appointment_round_trip_and_update() {
    let store = MemoryStore::new();
    let date = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
    let created = store
        .insert(appointment(Uuid::new_v4(), at(date, 9, 0), at(date, 9, 30)))
        .await
        .unwrap();

    let mut fetched = store.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.start_time, created.start_time);

    fetched.status = AppointmentStatus::Confirmed;
    store.update(fetched).await.unwrap();
    let after = store.get(created.id).await.unwrap().unwrap();
    assert_eq!(after.status, AppointmentStatus::Confirmed);
}

#[tokio::test]
async fn updating_a_missing_appointment_fails() {
    let store = MemoryStore::new();
    let date = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
    let ghost = appointment(Uuid::new_v4(), at(date, 9, 0), at(date, 9, 30));

    let err = store.update(ghost).await.unwrap_err();
    assert_matches!(err, StoreError::NotFound);
}

#[tokio::test]
async fn day_listing_filters_by_dentist_and_calendar_date() {
    let store = MemoryStore::new();
    let dentist_id = Uuid::new_v4();
    let monday = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
    let tuesday = NaiveDate::from_ymd_opt(2024, 3, 19).unwrap();

    store
        .insert(appointment(dentist_id, at(monday, 14, 0), at(monday, 15, 0)))
        .await
        .unwrap();
    store
        .insert(appointment(dentist_id, at(monday, 9, 0), at(monday, 10, 0)))
        .await
        .unwrap();
    store
        .insert(appointment(dentist_id, at(tuesday, 9, 0), at(tuesday, 10, 0)))
        .await
        .unwrap();
    store
        .insert(appointment(Uuid::new_v4(), at(monday, 9, 0), at(monday, 10, 0)))
        .await
        .unwrap();

    let day = store.list_for_day(dentist_id, monday).await.unwrap();
    assert_eq!(day.len(), 2);
    // Ascending by start time.
    assert_eq!(day[0].start_time, at(monday, 9, 0));
    assert_eq!(day[1].start_time, at(monday, 14, 0));
}

#[tokio::test]
async fn template_uniqueness_is_per_dentist_and_weekday() {
    let store = MemoryStore::new();
    let dentist_id = Uuid::new_v4();

    store.insert_template(template(dentist_id, 1)).await.unwrap();
    let err = store
        .insert_template(template(dentist_id, 1))
        .await
        .unwrap_err();
    assert_matches!(err, StoreError::AlreadyExists(_));

    // Different weekday and different dentist are both fine.
    store.insert_template(template(dentist_id, 2)).await.unwrap();
    store
        .insert_template(template(Uuid::new_v4(), 1))
        .await
        .unwrap();

    let templates = store.list_templates(dentist_id).await.unwrap();
    assert_eq!(templates.len(), 2);
    assert!(templates[0].day_of_week < templates[1].day_of_week);
}

#[tokio::test]
async fn find_template_matches_a_single_weekday() {
    let store = MemoryStore::new();
    let dentist_id = Uuid::new_v4();
    store.insert_template(template(dentist_id, 3)).await.unwrap();

    assert!(store.find_template(dentist_id, 3).await.unwrap().is_some());
    assert!(store.find_template(dentist_id, 4).await.unwrap().is_none());
    assert!(store
        .find_template(Uuid::new_v4(), 3)
        .await
        .unwrap()
        .is_none());
}
