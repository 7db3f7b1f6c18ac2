//! Due-date and urgency computation.
//!
//! The single canonical urgency computation: every caller (list views,
//! detail views, status resolution) consumes this instead of recomputing
//! inline.

use chrono::{DateTime, Duration, Utc};

use crate::models::{TrackSchedule, Urgency};

/// Width of the "due soon" window, in calendar days. Both bounds inclusive:
/// a track due exactly now or exactly 30 days out is `DueSoon`.
pub const DUE_SOON_WINDOW_DAYS: i64 = 30;

/// Compute a track's next due date and urgency.
///
/// `next_due = last_event_date + frequency_days`. Overdue strictly after the
/// due date has passed; no side effects, deterministic in the injected `now`.
pub fn compute_urgency(
    last_event_date: DateTime<Utc>,
    frequency_days: i64,
    now: DateTime<Utc>,
) -> TrackSchedule {
    let next_due = last_event_date + Duration::days(frequency_days);
    let lead = next_due - now;

    let urgency = if lead < Duration::zero() {
        Urgency::Overdue
    } else if lead <= Duration::days(DUE_SOON_WINDOW_DAYS) {
        Urgency::DueSoon
    } else {
        Urgency::Current
    };

    TrackSchedule { next_due, urgency }
}
