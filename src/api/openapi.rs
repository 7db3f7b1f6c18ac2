//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LabTrack API",
        version = "0.1.0",
        description = "Laboratory Equipment Lifecycle REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::register_equipment,
        equipment::list_equipment,
        equipment::list_overdue,
        equipment::list_due_soon,
        equipment::get_equipment,
        equipment::set_override,
        equipment::deactivate_equipment,
        // Logs
        equipment::create_usage_log,
        equipment::list_usage_logs,
        equipment::create_maintenance_log,
        equipment::list_maintenance_logs,
        equipment::create_calibration_log,
        equipment::list_calibration_logs,
        // Documents
        equipment::attach_document,
        equipment::list_documents,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::RegisterEquipment,
            crate::models::equipment::EquipmentView,
            crate::models::equipment::TrackSchedule,
            equipment::SetOverrideRequest,
            // Logs
            crate::models::usage_log::UsageLog,
            crate::models::usage_log::CreateUsageLog,
            crate::models::maintenance_log::MaintenanceLog,
            crate::models::maintenance_log::CreateMaintenanceLog,
            crate::models::calibration_log::CalibrationLog,
            crate::models::calibration_log::CreateCalibrationLog,
            // Documents
            crate::models::document::EquipmentDocument,
            crate::models::document::AttachDocument,
            // Enums
            crate::models::enums::EquipmentStatus,
            crate::models::enums::Urgency,
            crate::models::enums::EquipmentCategory,
            crate::models::enums::MaintenanceType,
            crate::models::enums::MaintenanceResult,
            crate::models::enums::CalibrationProvider,
            crate::models::enums::CalibrationResult,
            crate::models::enums::DocumentType,
            // Stats
            stats::FleetStats,
            stats::StatusCounts,
            stats::TrackCounts,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment registry and lifecycle"),
        (name = "usage", description = "Usage session logs"),
        (name = "maintenance", description = "Maintenance logs"),
        (name = "calibration", description = "Calibration logs"),
        (name = "documents", description = "Equipment documents"),
        (name = "stats", description = "Fleet statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
