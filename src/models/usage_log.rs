//! Usage log model

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::LogId;

/// Immutable usage session record.
///
/// Represents exclusive occupation of the equipment for the half-open
/// interval `[start_time, end_time)`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsageLog {
    pub id: LogId,
    pub equipment_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub operator: String,
    pub test_reference: Option<String>,
    /// Instrument settings used during the session
    #[serde(default)]
    pub parameters: IndexMap<String, String>,
    pub notes: Option<String>,
}

/// Append usage log request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUsageLog {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[validate(length(min = 1, max = 255))]
    pub operator: String,
    pub test_reference: Option<String>,
    #[serde(default)]
    pub parameters: IndexMap<String, String>,
    pub notes: Option<String>,
}
