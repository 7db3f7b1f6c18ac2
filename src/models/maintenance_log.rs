//! Maintenance log model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::{MaintenanceResult, MaintenanceType};
use super::LogId;

/// Immutable maintenance action record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceLog {
    pub id: LogId,
    pub equipment_id: Uuid,
    pub date: DateTime<Utc>,
    pub technician: String,
    pub maintenance_type: MaintenanceType,
    pub description: String,
    pub cost: f64,
    pub downtime_hours: f64,
    pub result: MaintenanceResult,
}

/// Append maintenance log request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMaintenanceLog {
    pub date: DateTime<Utc>,
    #[validate(length(min = 1, max = 255))]
    pub technician: String,
    pub maintenance_type: MaintenanceType,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub cost: f64,
    #[validate(range(min = 0.0))]
    pub downtime_hours: f64,
    pub result: MaintenanceResult,
}
