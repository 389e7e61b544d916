use assert_matches::assert_matches;

use appointment_cell::services::lifecycle::AppointmentLifecycle;
use appointment_cell::SchedulingError;
use shared_models::AppointmentStatus;

#[test]
fn scheduled_may_move_to_any_later_state() {
    let lifecycle = AppointmentLifecycle::new();

    for next in [
        AppointmentStatus::Confirmed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::Completed,
    ] {
        assert!(lifecycle
            .validate_transition(AppointmentStatus::Scheduled, next)
            .is_ok());
    }
}

#[test]
fn confirmed_may_only_cancel_or_complete() {
    let lifecycle = AppointmentLifecycle::new();

    assert!(lifecycle
        .validate_transition(AppointmentStatus::Confirmed, AppointmentStatus::Cancelled)
        .is_ok());
    assert!(lifecycle
        .validate_transition(AppointmentStatus::Confirmed, AppointmentStatus::Completed)
        .is_ok());

    let err = lifecycle
        .validate_transition(AppointmentStatus::Confirmed, AppointmentStatus::Scheduled)
        .unwrap_err();
    assert_matches!(err, SchedulingError::InvalidTransition { .. });
}

#[test]
fn terminal_states_accept_no_transitions() {
    let lifecycle = AppointmentLifecycle::new();

    for terminal in [AppointmentStatus::Cancelled, AppointmentStatus::Completed] {
        assert!(lifecycle.valid_transitions(terminal).is_empty());
        for next in [
            AppointmentStatus::Scheduled,
            AppointmentStatus::Confirmed,
            AppointmentStatus::Cancelled,
            AppointmentStatus::Completed,
        ] {
            let err = lifecycle.validate_transition(terminal, next).unwrap_err();
            assert_matches!(err, SchedulingError::InvalidTransition { from, to }
                if from == terminal && to == next);
        }
    }
}

#[test]
fn unknown_status_strings_are_rejected() {
    let lifecycle = AppointmentLifecycle::new();

    assert_eq!(
        lifecycle.parse_status("confirmed").unwrap(),
        AppointmentStatus::Confirmed
    );

    let err = lifecycle.parse_status("no_show").unwrap_err();
    assert_matches!(err, SchedulingError::InvalidStatus(value) if value == "no_show");
}

#[test]
fn creation_only_accepts_scheduled_as_explicit_initial_status() {
    let lifecycle = AppointmentLifecycle::new();

    assert!(lifecycle.validate_initial_status(None).is_ok());
    assert!(lifecycle.validate_initial_status(Some("scheduled")).is_ok());

    let err = lifecycle
        .validate_initial_status(Some("confirmed"))
        .unwrap_err();
    assert_matches!(err, SchedulingError::InvalidStatus(_));

    let err = lifecycle.validate_initial_status(Some("bogus")).unwrap_err();
    assert_matches!(err, SchedulingError::InvalidStatus(_));
}
