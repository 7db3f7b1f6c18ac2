//! Data models for LabTrack

pub mod calibration_log;
pub mod document;
pub mod enums;
pub mod equipment;
pub mod maintenance_log;
pub mod usage_log;

/// Server-assigned monotonically increasing log identifier
pub type LogId = i64;

/// Server-assigned monotonically increasing document identifier
pub type DocumentId = i64;

// Re-export commonly used types
pub use calibration_log::{CalibrationLog, CreateCalibrationLog};
pub use document::{AttachDocument, EquipmentDocument};
pub use enums::{
    CalibrationProvider, CalibrationResult, DocumentType, EquipmentCategory, EquipmentStatus,
    MaintenanceResult, MaintenanceType, Urgency,
};
pub use equipment::{Equipment, EquipmentView, RegisterEquipment, TrackSchedule};
pub use maintenance_log::{CreateMaintenanceLog, MaintenanceLog};
pub use usage_log::{CreateUsageLog, UsageLog};
