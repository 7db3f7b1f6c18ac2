//! Usage interval validation.

use chrono::{DateTime, Utc};

use crate::error::{AppError, AppResult};
use crate::models::UsageLog;

/// Two half-open intervals `[a_start, a_end)` and `[b_start, b_end)` overlap
/// iff each starts before the other ends. Back-to-back intervals sharing a
/// boundary instant do not overlap.
fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Check a candidate usage interval against the existing usage logs of the
/// same equipment.
///
/// Pure validation: never mutates state. The caller is responsible for
/// atomicity between this check and the append (it holds the equipment's
/// write lock across both). O(n) over the existing logs.
pub fn validate_interval(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    existing: &[UsageLog],
) -> AppResult<()> {
    if start >= end {
        return Err(AppError::InvalidInterval(format!(
            "start_time {} must be before end_time {}",
            start, end
        )));
    }

    for log in existing {
        if overlaps(start, end, log.start_time, log.end_time) {
            return Err(AppError::Overlap {
                conflicting_log_id: log.id,
            });
        }
    }

    Ok(())
}
