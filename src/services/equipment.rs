//! Equipment lifecycle service
//!
//! Thin façade over the ledger store: the only entry point the API layer
//! uses. Request-shape validation happens here so every transport gets the
//! same checks.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::{
    api::stats::{FleetStats, StatusCounts, TrackCounts},
    error::AppResult,
    ledger::LedgerStore,
    models::{
        AttachDocument, CalibrationLog, CreateCalibrationLog, CreateMaintenanceLog,
        CreateUsageLog, Equipment, EquipmentDocument, EquipmentStatus, EquipmentView,
        MaintenanceLog, RegisterEquipment, Urgency, UsageLog,
    },
};

#[derive(Clone)]
pub struct EquipmentLifecycleService {
    store: Arc<LedgerStore>,
}

impl EquipmentLifecycleService {
    pub fn new(store: Arc<LedgerStore>) -> Self {
        Self { store }
    }

    /// Register a new piece of equipment
    pub async fn register(&self, data: RegisterEquipment) -> AppResult<Equipment> {
        data.validate()?;
        let equipment = self.store.register(data)?;
        tracing::info!(
            equipment_id = %equipment.id,
            serial_number = %equipment.serial_number,
            "equipment registered"
        );
        Ok(equipment)
    }

    /// Record a usage session
    pub async fn append_usage_log(&self, id: Uuid, data: CreateUsageLog) -> AppResult<UsageLog> {
        data.validate()?;
        let log = self.store.append_usage(id, data).await?;
        tracing::debug!(equipment_id = %id, log_id = log.id, "usage log appended");
        Ok(log)
    }

    /// Record a maintenance action
    pub async fn append_maintenance_log(
        &self,
        id: Uuid,
        data: CreateMaintenanceLog,
    ) -> AppResult<MaintenanceLog> {
        data.validate()?;
        let log = self.store.append_maintenance(id, data).await?;
        tracing::debug!(equipment_id = %id, log_id = log.id, "maintenance log appended");
        Ok(log)
    }

    /// Record a calibration event
    pub async fn append_calibration_log(
        &self,
        id: Uuid,
        data: CreateCalibrationLog,
    ) -> AppResult<CalibrationLog> {
        data.validate()?;
        let log = self.store.append_calibration(id, data).await?;
        tracing::debug!(equipment_id = %id, log_id = log.id, "calibration log appended");
        Ok(log)
    }

    /// Set or clear the manual status override
    pub async fn set_manual_override(
        &self,
        id: Uuid,
        status: Option<EquipmentStatus>,
    ) -> AppResult<Equipment> {
        let equipment = self.store.set_manual_override(id, status).await?;
        match status {
            Some(s) => tracing::info!(equipment_id = %id, status = %s, "manual override set"),
            None => tracing::info!(equipment_id = %id, "manual override cleared"),
        }
        Ok(equipment)
    }

    /// Attach a document metadata pointer
    pub async fn attach_document(
        &self,
        id: Uuid,
        data: AttachDocument,
    ) -> AppResult<EquipmentDocument> {
        data.validate()?;
        self.store.attach_document(id, data).await
    }

    /// Deactivate an equipment record
    pub async fn deactivate(&self, id: Uuid) -> AppResult<Equipment> {
        let equipment = self.store.deactivate(id).await?;
        tracing::info!(equipment_id = %id, "equipment deactivated");
        Ok(equipment)
    }

    pub async fn get_view(&self, id: Uuid, now: DateTime<Utc>) -> AppResult<EquipmentView> {
        self.store.view(id, now).await
    }

    pub async fn list(&self, now: DateTime<Utc>, include_inactive: bool) -> Vec<EquipmentView> {
        self.store.list_views(now, include_inactive).await
    }

    /// Equipment with at least one overdue track
    pub async fn list_overdue(&self, now: DateTime<Utc>) -> Vec<EquipmentView> {
        self.store
            .list_views(now, false)
            .await
            .into_iter()
            .filter(|view| {
                view.calibration.urgency == Urgency::Overdue
                    || view.maintenance.urgency == Urgency::Overdue
            })
            .collect()
    }

    /// Equipment with at least one due-soon track and no overdue track, so
    /// the overdue and due-soon lists are disjoint
    pub async fn list_due_soon(&self, now: DateTime<Utc>) -> Vec<EquipmentView> {
        self.store
            .list_views(now, false)
            .await
            .into_iter()
            .filter(|view| {
                let urgencies = [view.calibration.urgency, view.maintenance.urgency];
                urgencies.contains(&Urgency::DueSoon) && !urgencies.contains(&Urgency::Overdue)
            })
            .collect()
    }

    pub async fn usage_logs(&self, id: Uuid) -> AppResult<Vec<UsageLog>> {
        self.store.usage_logs(id).await
    }

    pub async fn maintenance_logs(&self, id: Uuid) -> AppResult<Vec<MaintenanceLog>> {
        self.store.maintenance_logs(id).await
    }

    pub async fn calibration_logs(&self, id: Uuid) -> AppResult<Vec<CalibrationLog>> {
        self.store.calibration_logs(id).await
    }

    pub async fn documents(&self, id: Uuid) -> AppResult<Vec<EquipmentDocument>> {
        self.store.documents(id).await
    }

    /// Fleet summary for the dashboard. Status and urgency counts cover
    /// active equipment only.
    pub async fn stats(&self, now: DateTime<Utc>) -> FleetStats {
        let all = self.store.list_views(now, true).await;
        let total = all.len() as i64;

        let mut status = StatusCounts::default();
        let mut calibration = TrackCounts::default();
        let mut maintenance = TrackCounts::default();
        let mut active = 0i64;

        for view in all.iter().filter(|v| v.equipment.active) {
            active += 1;
            match view.derived_status {
                EquipmentStatus::Operational => status.operational += 1,
                EquipmentStatus::UnderMaintenance => status.under_maintenance += 1,
                EquipmentStatus::OutOfService => status.out_of_service += 1,
                EquipmentStatus::CalibrationRequired => status.calibration_required += 1,
            }
            calibration.tally(view.calibration.urgency);
            maintenance.tally(view.maintenance.urgency);
        }

        FleetStats {
            total,
            active,
            inactive: total - active,
            status,
            calibration,
            maintenance,
        }
    }
}
