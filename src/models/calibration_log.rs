//! Calibration log model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::{CalibrationProvider, CalibrationResult};
use super::LogId;

/// Immutable calibration event record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalibrationLog {
    pub id: LogId,
    pub equipment_id: Uuid,
    pub date: DateTime<Utc>,
    pub technician: String,
    pub provider: CalibrationProvider,
    /// Required when provider is External
    pub external_provider_name: Option<String>,
    pub result: CalibrationResult,
    pub certificate_number: String,
    pub valid_until: DateTime<Utc>,
}

/// Append calibration log request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCalibrationLog {
    pub date: DateTime<Utc>,
    #[validate(length(min = 1, max = 255))]
    pub technician: String,
    pub provider: CalibrationProvider,
    pub external_provider_name: Option<String>,
    pub result: CalibrationResult,
    #[validate(length(min = 1, max = 255))]
    pub certificate_number: String,
    pub valid_until: DateTime<Utc>,
}
