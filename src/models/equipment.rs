//! Equipment model

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::{EquipmentCategory, EquipmentStatus, Urgency};

/// Equipment record
///
/// Created once at registration, mutated only through accepted log appends
/// (which may advance a track's last-event date), an explicit override
/// set/clear, or deactivation. Never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    pub id: Uuid,
    pub name: String,
    pub model: String,
    pub serial_number: String,
    pub manufacturer: String,
    pub location: String,
    pub category: EquipmentCategory,
    /// Free-form specification key/value pairs (e.g. "wavelength range")
    #[serde(default)]
    pub specifications: IndexMap<String, String>,
    pub notes: Option<String>,
    /// Date of the last accepted passing calibration
    pub last_calibration_date: DateTime<Utc>,
    /// Calendar days between calibrations (> 0)
    pub calibration_frequency_days: i64,
    /// Date of the last accepted completed maintenance
    pub last_maintenance_date: DateTime<Utc>,
    /// Calendar days between maintenance actions (> 0)
    pub maintenance_frequency_days: i64,
    /// Operator-declared status; takes precedence over derived status until cleared
    pub manual_override_status: Option<EquipmentStatus>,
    /// Equipment is never deleted, only deactivated
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Register equipment request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterEquipment {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub model: String,
    #[validate(length(min = 1, max = 255))]
    pub serial_number: String,
    #[validate(length(min = 1, max = 255))]
    pub manufacturer: String,
    #[validate(length(min = 1, max = 255))]
    pub location: String,
    pub category: EquipmentCategory,
    #[serde(default)]
    pub specifications: IndexMap<String, String>,
    pub notes: Option<String>,
    /// Baseline for the calibration track (commissioning date if never calibrated)
    pub last_calibration_date: DateTime<Utc>,
    pub calibration_frequency_days: i64,
    /// Baseline for the maintenance track
    pub last_maintenance_date: DateTime<Utc>,
    pub maintenance_frequency_days: i64,
}

/// A track's next due date and urgency, relative to the `now` it was
/// computed against
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct TrackSchedule {
    pub next_due: DateTime<Utc>,
    pub urgency: Urgency,
}

/// Read-side composition of equipment, derived status and both track
/// schedules. Recomputed on every read — never cached.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EquipmentView {
    #[serde(flatten)]
    pub equipment: Equipment,
    pub derived_status: EquipmentStatus,
    pub calibration: TrackSchedule,
    pub maintenance: TrackSchedule,
    pub usage_log_count: usize,
    pub maintenance_log_count: usize,
    pub calibration_log_count: usize,
    pub document_count: usize,
}
