//! Equipment lifecycle API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        AttachDocument, CalibrationLog, CreateCalibrationLog, CreateMaintenanceLog,
        CreateUsageLog, Equipment, EquipmentDocument, EquipmentStatus, EquipmentView,
        MaintenanceLog, RegisterEquipment, UsageLog,
    },
};

/// Query parameters for single-equipment reads
#[derive(Debug, Deserialize, IntoParams)]
pub struct AsOfQuery {
    /// Evaluate status and urgencies at this instant (defaults to the
    /// server clock)
    pub now: Option<DateTime<Utc>>,
}

/// Query parameters for equipment list reads
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Evaluate statuses and urgencies at this instant (defaults to the
    /// server clock)
    pub now: Option<DateTime<Utc>>,
    /// Include deactivated equipment
    pub include_inactive: Option<bool>,
}

/// Set or clear the manual override request
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetOverrideRequest {
    /// Status to impose; `null` clears the override and returns control to
    /// derived resolution
    pub status: Option<EquipmentStatus>,
}

/// Register new equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = RegisterEquipment,
    responses(
        (status = 201, description = "Equipment registered", body = Equipment),
        (status = 409, description = "Serial number already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn register_equipment(
    State(state): State<crate::AppState>,
    Json(data): Json<RegisterEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    let equipment = state.services.equipment.register(data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// List all equipment with derived status and track schedules
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    params(ListQuery),
    responses(
        (status = 200, description = "Equipment list", body = Vec<EquipmentView>)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<EquipmentView>> {
    let now = query.now.unwrap_or_else(Utc::now);
    let include_inactive = query.include_inactive.unwrap_or(false);
    Json(state.services.equipment.list(now, include_inactive).await)
}

/// List equipment with at least one overdue track
#[utoipa::path(
    get,
    path = "/equipment/overdue",
    tag = "equipment",
    params(AsOfQuery),
    responses(
        (status = 200, description = "Overdue equipment", body = Vec<EquipmentView>)
    )
)]
pub async fn list_overdue(
    State(state): State<crate::AppState>,
    Query(query): Query<AsOfQuery>,
) -> Json<Vec<EquipmentView>> {
    let now = query.now.unwrap_or_else(Utc::now);
    Json(state.services.equipment.list_overdue(now).await)
}

/// List equipment due within the next 30 days on at least one track
#[utoipa::path(
    get,
    path = "/equipment/due-soon",
    tag = "equipment",
    params(AsOfQuery),
    responses(
        (status = 200, description = "Equipment due soon", body = Vec<EquipmentView>)
    )
)]
pub async fn list_due_soon(
    State(state): State<crate::AppState>,
    Query(query): Query<AsOfQuery>,
) -> Json<Vec<EquipmentView>> {
    let now = query.now.unwrap_or_else(Utc::now);
    Json(state.services.equipment.list_due_soon(now).await)
}

/// Get one equipment view
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(
        ("id" = Uuid, Path, description = "Equipment ID"),
        AsOfQuery
    ),
    responses(
        (status = 200, description = "Equipment view", body = EquipmentView),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<AsOfQuery>,
) -> AppResult<Json<EquipmentView>> {
    let now = query.now.unwrap_or_else(Utc::now);
    let view = state.services.equipment.get_view(id, now).await?;
    Ok(Json(view))
}

/// Record a usage session
#[utoipa::path(
    post,
    path = "/equipment/{id}/usage-logs",
    tag = "usage",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    request_body = CreateUsageLog,
    responses(
        (status = 201, description = "Usage log appended", body = UsageLog),
        (status = 409, description = "Interval overlaps an existing log", body = crate::error::ErrorResponse),
        (status = 422, description = "Equipment unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_usage_log(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<CreateUsageLog>,
) -> AppResult<(StatusCode, Json<UsageLog>)> {
    let log = state.services.equipment.append_usage_log(id, data).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// List usage logs in append order
#[utoipa::path(
    get,
    path = "/equipment/{id}/usage-logs",
    tag = "usage",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Usage logs", body = Vec<UsageLog>)
    )
)]
pub async fn list_usage_logs(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<UsageLog>>> {
    let logs = state.services.equipment.usage_logs(id).await?;
    Ok(Json(logs))
}

/// Record a maintenance action
#[utoipa::path(
    post,
    path = "/equipment/{id}/maintenance-logs",
    tag = "maintenance",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    request_body = CreateMaintenanceLog,
    responses(
        (status = 201, description = "Maintenance log appended", body = MaintenanceLog),
        (status = 422, description = "Date precedes the track's last event", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_maintenance_log(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<CreateMaintenanceLog>,
) -> AppResult<(StatusCode, Json<MaintenanceLog>)> {
    let log = state
        .services
        .equipment
        .append_maintenance_log(id, data)
        .await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// List maintenance logs in append order
#[utoipa::path(
    get,
    path = "/equipment/{id}/maintenance-logs",
    tag = "maintenance",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Maintenance logs", body = Vec<MaintenanceLog>)
    )
)]
pub async fn list_maintenance_logs(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<MaintenanceLog>>> {
    let logs = state.services.equipment.maintenance_logs(id).await?;
    Ok(Json(logs))
}

/// Record a calibration event
#[utoipa::path(
    post,
    path = "/equipment/{id}/calibration-logs",
    tag = "calibration",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    request_body = CreateCalibrationLog,
    responses(
        (status = 201, description = "Calibration log appended", body = CalibrationLog),
        (status = 422, description = "Date precedes the track's last event", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_calibration_log(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<CreateCalibrationLog>,
) -> AppResult<(StatusCode, Json<CalibrationLog>)> {
    let log = state
        .services
        .equipment
        .append_calibration_log(id, data)
        .await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// List calibration logs in append order
#[utoipa::path(
    get,
    path = "/equipment/{id}/calibration-logs",
    tag = "calibration",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Calibration logs", body = Vec<CalibrationLog>)
    )
)]
pub async fn list_calibration_logs(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<CalibrationLog>>> {
    let logs = state.services.equipment.calibration_logs(id).await?;
    Ok(Json(logs))
}

/// Attach a document metadata pointer
#[utoipa::path(
    post,
    path = "/equipment/{id}/documents",
    tag = "documents",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    request_body = AttachDocument,
    responses(
        (status = 201, description = "Document attached", body = EquipmentDocument)
    )
)]
pub async fn attach_document(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<AttachDocument>,
) -> AppResult<(StatusCode, Json<EquipmentDocument>)> {
    let document = state.services.equipment.attach_document(id, data).await?;
    Ok((StatusCode::CREATED, Json(document)))
}

/// List attached documents
#[utoipa::path(
    get,
    path = "/equipment/{id}/documents",
    tag = "documents",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Documents", body = Vec<EquipmentDocument>)
    )
)]
pub async fn list_documents(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<EquipmentDocument>>> {
    let documents = state.services.equipment.documents(id).await?;
    Ok(Json(documents))
}

/// Set or clear the manual status override
#[utoipa::path(
    put,
    path = "/equipment/{id}/override",
    tag = "equipment",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    request_body = SetOverrideRequest,
    responses(
        (status = 200, description = "Override updated", body = Equipment),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn set_override(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<SetOverrideRequest>,
) -> AppResult<Json<Equipment>> {
    let equipment = state
        .services
        .equipment
        .set_manual_override(id, data.status)
        .await?;
    Ok(Json(equipment))
}

/// Deactivate an equipment record
#[utoipa::path(
    post,
    path = "/equipment/{id}/deactivate",
    tag = "equipment",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment deactivated", body = Equipment),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn deactivate_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.deactivate(id).await?;
    Ok(Json(equipment))
}
