//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Operational status of a piece of equipment.
///
/// Never stored as independent truth — always derived from the ledger,
/// except when set as a manual override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EquipmentStatus {
    Operational,
    UnderMaintenance,
    OutOfService,
    CalibrationRequired,
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EquipmentStatus::Operational => "Operational",
            EquipmentStatus::UnderMaintenance => "Under Maintenance",
            EquipmentStatus::OutOfService => "Out of Service",
            EquipmentStatus::CalibrationRequired => "Calibration Required",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Urgency
// ---------------------------------------------------------------------------

/// Classification of a track's due date relative to now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Urgency {
    Current,
    DueSoon,
    Overdue,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Urgency::Current => "Current",
            Urgency::DueSoon => "Due Soon",
            Urgency::Overdue => "Overdue",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// EquipmentCategory
// ---------------------------------------------------------------------------

/// Equipment category codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EquipmentCategory {
    Analytical,
    Measurement,
    Processing,
    Imaging,
    Storage,
    Safety,
    General,
}

impl std::fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EquipmentCategory::Analytical => "Analytical",
            EquipmentCategory::Measurement => "Measurement",
            EquipmentCategory::Processing => "Processing",
            EquipmentCategory::Imaging => "Imaging",
            EquipmentCategory::Storage => "Storage",
            EquipmentCategory::Safety => "Safety",
            EquipmentCategory::General => "General",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MaintenanceType
// ---------------------------------------------------------------------------

/// Kind of maintenance action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MaintenanceType {
    Preventive,
    Corrective,
    Predictive,
}

// ---------------------------------------------------------------------------
// MaintenanceResult
// ---------------------------------------------------------------------------

/// Outcome of a maintenance action.
///
/// Only `Completed` advances the maintenance track; a `Pending` log marks the
/// equipment as under maintenance until a later log resolves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MaintenanceResult {
    Completed,
    Pending,
    Failed,
}

// ---------------------------------------------------------------------------
// CalibrationProvider
// ---------------------------------------------------------------------------

/// Who performed a calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CalibrationProvider {
    Internal,
    External,
}

// ---------------------------------------------------------------------------
// CalibrationResult
// ---------------------------------------------------------------------------

/// Outcome of a calibration.
///
/// `Pass` and `ConditionalPass` advance the calibration track; `Fail` leaves
/// the track untouched and takes the equipment out of service until a later
/// passing calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CalibrationResult {
    Pass,
    Fail,
    ConditionalPass,
}

// ---------------------------------------------------------------------------
// DocumentType
// ---------------------------------------------------------------------------

/// Equipment document type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DocumentType {
    Manual,
    Certificate,
    Datasheet,
    Sop,
    Other,
}
