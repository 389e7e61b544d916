//! Slot generation and conflict filtering.
//!
//! Slots are transient values: bare start timestamps of fixed-duration
//! bookable intervals, recomputed on every query.

use chrono::{DateTime, Duration, Utc};

use shared_models::Appointment;

/// Candidate slot starts for an availability window, walked in fixed steps.
///
/// Yields `start, start + D, start + 2D, ...` for as long as the whole slot
/// fits: a candidate whose end would pass the window end is never produced.
/// Cloning restarts the walk from wherever the clone was taken.
#[derive(Debug, Clone)]
pub struct SlotSequence {
    cursor: DateTime<Utc>,
    window_end: DateTime<Utc>,
    duration: Duration,
}

impl SlotSequence {
    pub fn new(window_start: DateTime<Utc>, window_end: DateTime<Utc>, duration: Duration) -> Self {
        Self {
            cursor: window_start,
            window_end,
            duration,
        }
    }
}

impl Iterator for SlotSequence {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<DateTime<Utc>> {
        if self.duration <= Duration::zero() {
            return None;
        }
        if self.cursor + self.duration > self.window_end {
            return None;
        }
        let slot = self.cursor;
        self.cursor = slot + self.duration;
        Some(slot)
    }
}

/// Half-open interval intersection: `[start1, end1)` meets `[start2, end2)`
/// iff `start1 < end2 && start2 < end1`. Touching endpoints do not intersect.
pub fn intervals_overlap(
    start1: DateTime<Utc>,
    end1: DateTime<Utc>,
    start2: DateTime<Utc>,
    end2: DateTime<Utc>,
) -> bool {
    start1 < end2 && start2 < end1
}

/// Whether a candidate slot `[slot_start, slot_start + duration)` collides
/// with any appointment that still occupies its interval. Cancelled
/// appointments never block; every other status does, completed included.
pub fn slot_is_blocked(
    slot_start: DateTime<Utc>,
    duration: Duration,
    booked: &[Appointment],
) -> bool {
    let slot_end = slot_start + duration;
    booked.iter().any(|apt| {
        apt.status.blocks_slot()
            && intervals_overlap(slot_start, slot_end, apt.start_time, apt.end_time)
    })
}

/// Drop candidates that collide with a booked interval, preserving order.
pub fn filter_available(
    candidates: impl Iterator<Item = DateTime<Utc>>,
    duration: Duration,
    booked: &[Appointment],
) -> Vec<DateTime<Utc>> {
    candidates
        .filter(|slot| !slot_is_blocked(*slot, duration, booked))
        .collect()
}
