//! Derived operational status resolution.

use chrono::{DateTime, Utc};

use crate::models::{
    CalibrationLog, CalibrationResult, Equipment, EquipmentStatus, MaintenanceLog,
    MaintenanceResult, Urgency,
};

use super::schedule::compute_urgency;

/// Resolve the equipment's current operational status from ledger contents,
/// `now`, and any manual override. First matching rule wins, highest
/// severity first:
///
/// 1. manual override, verbatim
/// 2. most recent maintenance log still `Pending` → `UnderMaintenance`
/// 3. most recent calibration log `Fail` with no later pass → `OutOfService`
/// 4. calibration track overdue → `CalibrationRequired`
/// 5. `Operational`
///
/// Pure and re-evaluated on every read; there is no stored status field to
/// go stale. "Most recent" is the last accepted append, which the
/// monotonicity guard keeps in date order.
pub fn resolve_status(
    equipment: &Equipment,
    maintenance_logs: &[MaintenanceLog],
    calibration_logs: &[CalibrationLog],
    now: DateTime<Utc>,
) -> EquipmentStatus {
    if let Some(status) = equipment.manual_override_status {
        return status;
    }

    if maintenance_logs
        .last()
        .is_some_and(|log| log.result == MaintenanceResult::Pending)
    {
        return EquipmentStatus::UnderMaintenance;
    }

    if calibration_logs
        .last()
        .is_some_and(|log| log.result == CalibrationResult::Fail)
    {
        return EquipmentStatus::OutOfService;
    }

    let calibration = compute_urgency(
        equipment.last_calibration_date,
        equipment.calibration_frequency_days,
        now,
    );
    if calibration.urgency == Urgency::Overdue {
        return EquipmentStatus::CalibrationRequired;
    }

    EquipmentStatus::Operational
}
