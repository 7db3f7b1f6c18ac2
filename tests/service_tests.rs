//! Service-level integration tests
//!
//! Exercise the lifecycle service end-to-end against the in-memory ledger.

use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;

use labtrack_server::error::AppError;
use labtrack_server::models::{
    CalibrationProvider, CalibrationResult, CreateCalibrationLog, CreateMaintenanceLog,
    CreateUsageLog, EquipmentCategory, EquipmentStatus, MaintenanceResult, MaintenanceType,
    RegisterEquipment, Urgency,
};
use labtrack_server::services::Services;

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn register_request(serial: &str) -> RegisterEquipment {
    RegisterEquipment {
        name: format!("Centrifuge {}", serial),
        model: "CF-600".to_string(),
        serial_number: serial.to_string(),
        manufacturer: "Acme Instruments".to_string(),
        location: "Lab C".to_string(),
        category: EquipmentCategory::Processing,
        specifications: IndexMap::new(),
        notes: None,
        last_calibration_date: ts("2025-01-01T00:00:00Z"),
        calibration_frequency_days: 365,
        last_maintenance_date: ts("2025-01-01T00:00:00Z"),
        maintenance_frequency_days: 180,
    }
}

fn usage(start: &str, end: &str) -> CreateUsageLog {
    CreateUsageLog {
        start_time: ts(start),
        end_time: ts(end),
        operator: "J. Doe".to_string(),
        test_reference: Some("TST-2025-117".to_string()),
        parameters: IndexMap::new(),
        notes: None,
    }
}

fn maintenance(date: &str, result: MaintenanceResult) -> CreateMaintenanceLog {
    CreateMaintenanceLog {
        date: ts(date),
        technician: "M. Okafor".to_string(),
        maintenance_type: MaintenanceType::Corrective,
        description: "Rotor bearing replacement".to_string(),
        cost: 450.0,
        downtime_hours: 6.0,
        result,
    }
}

fn calibration(date: &str, result: CalibrationResult) -> CreateCalibrationLog {
    CreateCalibrationLog {
        date: ts(date),
        technician: "C. Vega".to_string(),
        provider: CalibrationProvider::Internal,
        external_provider_name: None,
        result,
        certificate_number: "CERT-1207".to_string(),
        valid_until: ts(date) + Duration::days(365),
    }
}

#[tokio::test]
async fn full_equipment_lifecycle() {
    let services = Services::new();
    let svc = &services.equipment;

    let eq = svc.register(register_request("LC-001")).await.unwrap();

    // Fresh equipment accepts a usage session
    svc.append_usage_log(eq.id, usage("2025-02-03T09:00:00Z", "2025-02-03T12:00:00Z"))
        .await
        .unwrap();

    // Open a repair: equipment goes under maintenance, usage is blocked
    svc.append_maintenance_log(eq.id, maintenance("2025-02-04T00:00:00Z", MaintenanceResult::Pending))
        .await
        .unwrap();
    let view = svc.get_view(eq.id, ts("2025-02-05T00:00:00Z")).await.unwrap();
    assert_eq!(view.derived_status, EquipmentStatus::UnderMaintenance);
    let err = svc
        .append_usage_log(eq.id, usage("2025-02-05T09:00:00Z", "2025-02-05T10:00:00Z"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::EquipmentUnavailable(_)));

    // Close the repair: the track advances and usage resumes
    svc.append_maintenance_log(eq.id, maintenance("2025-02-06T00:00:00Z", MaintenanceResult::Completed))
        .await
        .unwrap();
    let view = svc.get_view(eq.id, ts("2025-02-07T00:00:00Z")).await.unwrap();
    assert_eq!(view.derived_status, EquipmentStatus::Operational);
    assert_eq!(view.equipment.last_maintenance_date, ts("2025-02-06T00:00:00Z"));
    svc.append_usage_log(eq.id, usage("2025-02-07T09:00:00Z", "2025-02-07T10:00:00Z"))
        .await
        .unwrap();

    // A failed calibration takes it out of service until a pass
    svc.append_calibration_log(eq.id, calibration("2025-02-08T00:00:00Z", CalibrationResult::Fail))
        .await
        .unwrap();
    let view = svc.get_view(eq.id, ts("2025-02-09T00:00:00Z")).await.unwrap();
    assert_eq!(view.derived_status, EquipmentStatus::OutOfService);
    let err = svc
        .append_usage_log(eq.id, usage("2025-02-09T09:00:00Z", "2025-02-09T10:00:00Z"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::EquipmentUnavailable(_)));

    svc.append_calibration_log(eq.id, calibration("2025-02-10T00:00:00Z", CalibrationResult::Pass))
        .await
        .unwrap();
    let view = svc.get_view(eq.id, ts("2025-02-11T00:00:00Z")).await.unwrap();
    assert_eq!(view.derived_status, EquipmentStatus::Operational);
    assert_eq!(view.equipment.last_calibration_date, ts("2025-02-10T00:00:00Z"));
    svc.append_usage_log(eq.id, usage("2025-02-11T09:00:00Z", "2025-02-11T10:00:00Z"))
        .await
        .unwrap();

    // The ledger kept every accepted record
    assert_eq!(svc.usage_logs(eq.id).await.unwrap().len(), 3);
    assert_eq!(svc.maintenance_logs(eq.id).await.unwrap().len(), 2);
    assert_eq!(svc.calibration_logs(eq.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn overlapping_usage_is_rejected_with_conflicting_log() {
    let services = Services::new();
    let svc = &services.equipment;
    let eq = svc.register(register_request("LC-002")).await.unwrap();

    let first = svc
        .append_usage_log(eq.id, usage("2025-04-10T09:00:00Z", "2025-04-10T11:00:00Z"))
        .await
        .unwrap();

    let err = svc
        .append_usage_log(eq.id, usage("2025-04-10T10:00:00Z", "2025-04-10T12:00:00Z"))
        .await
        .unwrap_err();
    match err {
        AppError::Overlap { conflicting_log_id } => assert_eq!(conflicting_log_id, first.id),
        other => panic!("expected Overlap, got {:?}", other),
    }

    // Back-to-back is fine
    svc.append_usage_log(eq.id, usage("2025-04-10T11:00:00Z", "2025-04-10T12:00:00Z"))
        .await
        .unwrap();
}

#[tokio::test]
async fn overdue_and_due_soon_lists_are_disjoint() {
    let services = Services::new();
    let svc = &services.equipment;
    let now = ts("2025-06-01T00:00:00Z");

    // Overdue calibration
    let mut overdue = register_request("LC-010");
    overdue.last_calibration_date = ts("2024-01-01T00:00:00Z");
    overdue.calibration_frequency_days = 30;
    let overdue = svc.register(overdue).await.unwrap();

    // Calibration due 2025-06-19: within the 30-day window
    let mut due_soon = register_request("LC-011");
    due_soon.last_calibration_date = ts("2025-05-20T00:00:00Z");
    due_soon.calibration_frequency_days = 30;
    due_soon.last_maintenance_date = ts("2025-05-01T00:00:00Z");
    due_soon.maintenance_frequency_days = 365;
    let due_soon = svc.register(due_soon).await.unwrap();

    // Everything comfortably in the future
    let mut current = register_request("LC-012");
    current.last_calibration_date = ts("2025-05-01T00:00:00Z");
    current.last_maintenance_date = ts("2025-05-01T00:00:00Z");
    current.calibration_frequency_days = 365;
    current.maintenance_frequency_days = 365;
    let current = svc.register(current).await.unwrap();

    let overdue_list = svc.list_overdue(now).await;
    assert_eq!(overdue_list.len(), 1);
    assert_eq!(overdue_list[0].equipment.id, overdue.id);

    let due_soon_list = svc.list_due_soon(now).await;
    assert_eq!(due_soon_list.len(), 1);
    assert_eq!(due_soon_list[0].equipment.id, due_soon.id);
    assert_eq!(due_soon_list[0].calibration.urgency, Urgency::DueSoon);

    let all = svc.list(now, false).await;
    assert_eq!(all.len(), 3);
    assert!(all.iter().any(|v| v.equipment.id == current.id));
}

#[tokio::test]
async fn override_wins_until_cleared() {
    let services = Services::new();
    let svc = &services.equipment;
    let now = ts("2025-02-01T00:00:00Z");
    let eq = svc.register(register_request("LC-020")).await.unwrap();

    svc.set_manual_override(eq.id, Some(EquipmentStatus::OutOfService))
        .await
        .unwrap();
    let view = svc.get_view(eq.id, now).await.unwrap();
    assert_eq!(view.derived_status, EquipmentStatus::OutOfService);
    assert_eq!(
        view.equipment.manual_override_status,
        Some(EquipmentStatus::OutOfService)
    );

    // Setting the same override again is idempotent
    svc.set_manual_override(eq.id, Some(EquipmentStatus::OutOfService))
        .await
        .unwrap();

    svc.set_manual_override(eq.id, None).await.unwrap();
    let view = svc.get_view(eq.id, now).await.unwrap();
    assert_eq!(view.derived_status, EquipmentStatus::Operational);
    assert_eq!(view.equipment.manual_override_status, None);
}

#[tokio::test]
async fn duplicate_serial_is_rejected_until_deactivation() {
    let services = Services::new();
    let svc = &services.equipment;

    let first = svc.register(register_request("LC-030")).await.unwrap();
    let err = svc.register(register_request("LC-030")).await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateSerialNumber(_)));

    svc.deactivate(first.id).await.unwrap();
    svc.register(register_request("LC-030")).await.unwrap();
}

#[tokio::test]
async fn request_shape_violations_are_rejected() {
    let services = Services::new();
    let svc = &services.equipment;
    let eq = svc.register(register_request("LC-040")).await.unwrap();

    let mut bad = usage("2025-04-10T09:00:00Z", "2025-04-10T10:00:00Z");
    bad.operator = String::new();
    let err = svc.append_usage_log(eq.id, bad).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let mut bad = maintenance("2025-02-01T00:00:00Z", MaintenanceResult::Completed);
    bad.cost = -1.0;
    let err = svc.append_maintenance_log(eq.id, bad).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn stats_summarize_the_fleet() {
    let services = Services::new();
    let svc = &services.equipment;
    let now = ts("2025-06-01T00:00:00Z");

    let mut needs_calibration = register_request("LC-050");
    needs_calibration.last_calibration_date = ts("2024-01-01T00:00:00Z");
    needs_calibration.calibration_frequency_days = 30;
    svc.register(needs_calibration).await.unwrap();

    let mut healthy = register_request("LC-051");
    healthy.last_calibration_date = ts("2025-05-01T00:00:00Z");
    healthy.last_maintenance_date = ts("2025-05-01T00:00:00Z");
    healthy.calibration_frequency_days = 365;
    healthy.maintenance_frequency_days = 365;
    svc.register(healthy).await.unwrap();

    let retired = svc.register(register_request("LC-052")).await.unwrap();
    svc.deactivate(retired.id).await.unwrap();

    let stats = svc.stats(now).await;
    assert_eq!(stats.total, 3);
    assert_eq!(stats.active, 2);
    assert_eq!(stats.inactive, 1);
    assert_eq!(stats.status.calibration_required, 1);
    assert_eq!(stats.status.operational, 1);
    assert_eq!(stats.calibration.overdue, 1);
    assert_eq!(stats.calibration.current, 1);
}
