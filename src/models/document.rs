//! Equipment document model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::DocumentType;
use super::DocumentId;

/// Immutable document metadata pointer.
///
/// Attached informationally; never affects derived status.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EquipmentDocument {
    pub id: DocumentId,
    pub equipment_id: Uuid,
    pub name: String,
    pub document_type: DocumentType,
    pub upload_date: DateTime<Utc>,
    pub storage_url: String,
}

/// Attach document request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AttachDocument {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub document_type: DocumentType,
    /// Defaults to the server clock when omitted
    pub upload_date: Option<DateTime<Utc>>,
    #[validate(length(min = 1, max = 2048))]
    pub storage_url: String,
}
