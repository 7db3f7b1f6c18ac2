//! In-memory ledger store.
//!
//! Sole owner and sole writer of equipment records and their append-only log
//! collections. Every mutation for one equipment runs under that equipment's
//! write lock, so validation and append are atomic; operations on different
//! equipment proceed in parallel.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{
    AttachDocument, CalibrationLog, CalibrationProvider, CalibrationResult, CreateCalibrationLog,
    CreateMaintenanceLog, CreateUsageLog, Equipment, EquipmentDocument, EquipmentStatus,
    EquipmentView, MaintenanceLog, MaintenanceResult, RegisterEquipment, UsageLog,
};

use super::{interval, schedule, status};

/// One equipment record together with its ledger: the three append-only log
/// collections plus attached documents.
#[derive(Debug)]
pub struct EquipmentLedger {
    pub equipment: Equipment,
    pub usage_logs: Vec<UsageLog>,
    pub maintenance_logs: Vec<MaintenanceLog>,
    pub calibration_logs: Vec<CalibrationLog>,
    pub documents: Vec<EquipmentDocument>,
}

impl EquipmentLedger {
    fn new(equipment: Equipment) -> Self {
        Self {
            equipment,
            usage_logs: Vec::new(),
            maintenance_logs: Vec::new(),
            calibration_logs: Vec::new(),
            documents: Vec::new(),
        }
    }

    /// Read-side composition: derived status plus both track schedules,
    /// recomputed against the injected `now`.
    pub fn view(&self, now: DateTime<Utc>) -> EquipmentView {
        let derived_status = status::resolve_status(
            &self.equipment,
            &self.maintenance_logs,
            &self.calibration_logs,
            now,
        );
        let calibration = schedule::compute_urgency(
            self.equipment.last_calibration_date,
            self.equipment.calibration_frequency_days,
            now,
        );
        let maintenance = schedule::compute_urgency(
            self.equipment.last_maintenance_date,
            self.equipment.maintenance_frequency_days,
            now,
        );

        EquipmentView {
            equipment: self.equipment.clone(),
            derived_status,
            calibration,
            maintenance,
            usage_log_count: self.usage_logs.len(),
            maintenance_log_count: self.maintenance_logs.len(),
            calibration_log_count: self.calibration_logs.len(),
            document_count: self.documents.len(),
        }
    }
}

pub type SharedEquipmentLedger = Arc<RwLock<EquipmentLedger>>;

/// The single source of truth for equipment and logs.
pub struct LedgerStore {
    ledgers: DashMap<Uuid, SharedEquipmentLedger>,
    /// Serial number → equipment id, for live (active) equipment only
    serial_index: DashMap<String, Uuid>,
    next_record_id: AtomicI64,
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore {
    pub fn new() -> Self {
        Self {
            ledgers: DashMap::new(),
            serial_index: DashMap::new(),
            next_record_id: AtomicI64::new(1),
        }
    }

    fn next_id(&self) -> i64 {
        self.next_record_id.fetch_add(1, Ordering::Relaxed)
    }

    fn ledger(&self, id: &Uuid) -> AppResult<SharedEquipmentLedger> {
        self.ledgers
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    pub fn equipment_count(&self) -> usize {
        self.ledgers.len()
    }

    /// Register a new equipment record.
    ///
    /// Fails if a live record already holds the same serial number, or if
    /// either track frequency is not strictly positive. The serial index
    /// entry is claimed atomically so concurrent registrations of the same
    /// serial cannot both succeed.
    pub fn register(&self, spec: RegisterEquipment) -> AppResult<Equipment> {
        if spec.calibration_frequency_days <= 0 {
            return Err(AppError::NonPositiveFrequency(format!(
                "calibration_frequency_days must be > 0, got {}",
                spec.calibration_frequency_days
            )));
        }
        if spec.maintenance_frequency_days <= 0 {
            return Err(AppError::NonPositiveFrequency(format!(
                "maintenance_frequency_days must be > 0, got {}",
                spec.maintenance_frequency_days
            )));
        }

        let id = Uuid::new_v4();
        match self.serial_index.entry(spec.serial_number.clone()) {
            Entry::Occupied(_) => {
                return Err(AppError::DuplicateSerialNumber(spec.serial_number));
            }
            Entry::Vacant(vacant) => {
                vacant.insert(id);
            }
        }

        let equipment = Equipment {
            id,
            name: spec.name,
            model: spec.model,
            serial_number: spec.serial_number,
            manufacturer: spec.manufacturer,
            location: spec.location,
            category: spec.category,
            specifications: spec.specifications,
            notes: spec.notes,
            last_calibration_date: spec.last_calibration_date,
            calibration_frequency_days: spec.calibration_frequency_days,
            last_maintenance_date: spec.last_maintenance_date,
            maintenance_frequency_days: spec.maintenance_frequency_days,
            manual_override_status: None,
            active: true,
            created_at: Utc::now(),
        };

        self.ledgers
            .insert(id, Arc::new(RwLock::new(EquipmentLedger::new(equipment.clone()))));

        Ok(equipment)
    }

    /// Append a usage session.
    ///
    /// Rejections happen before any append: interval validation first, then
    /// availability — the equipment must not be out of service or under
    /// maintenance at the session's start time.
    pub async fn append_usage(&self, id: Uuid, entry: CreateUsageLog) -> AppResult<UsageLog> {
        let ledger = self.ledger(&id)?;
        let mut guard = ledger.write().await;

        if !guard.equipment.active {
            return Err(AppError::EquipmentUnavailable(format!(
                "Equipment {} is deactivated",
                id
            )));
        }

        interval::validate_interval(entry.start_time, entry.end_time, &guard.usage_logs)?;

        let status_at_start = status::resolve_status(
            &guard.equipment,
            &guard.maintenance_logs,
            &guard.calibration_logs,
            entry.start_time,
        );
        if matches!(
            status_at_start,
            EquipmentStatus::OutOfService | EquipmentStatus::UnderMaintenance
        ) {
            return Err(AppError::EquipmentUnavailable(format!(
                "Equipment {} is {} at {}",
                id, status_at_start, entry.start_time
            )));
        }

        let log = UsageLog {
            id: self.next_id(),
            equipment_id: id,
            start_time: entry.start_time,
            end_time: entry.end_time,
            operator: entry.operator,
            test_reference: entry.test_reference,
            parameters: entry.parameters,
            notes: entry.notes,
        };
        guard.usage_logs.push(log.clone());

        Ok(log)
    }

    /// Append a maintenance action.
    ///
    /// The log date may not precede the track's last recorded event; a
    /// `Completed` result advances the maintenance track.
    pub async fn append_maintenance(
        &self,
        id: Uuid,
        entry: CreateMaintenanceLog,
    ) -> AppResult<MaintenanceLog> {
        let ledger = self.ledger(&id)?;
        let mut guard = ledger.write().await;

        if !guard.equipment.active {
            return Err(AppError::EquipmentUnavailable(format!(
                "Equipment {} is deactivated",
                id
            )));
        }

        if entry.date < guard.equipment.last_maintenance_date {
            return Err(AppError::NonMonotonicDate(format!(
                "maintenance log dated {} precedes last recorded maintenance {}",
                entry.date, guard.equipment.last_maintenance_date
            )));
        }

        let log = MaintenanceLog {
            id: self.next_id(),
            equipment_id: id,
            date: entry.date,
            technician: entry.technician,
            maintenance_type: entry.maintenance_type,
            description: entry.description,
            cost: entry.cost,
            downtime_hours: entry.downtime_hours,
            result: entry.result,
        };
        guard.maintenance_logs.push(log.clone());

        if log.result == MaintenanceResult::Completed {
            guard.equipment.last_maintenance_date = log.date;
        }

        Ok(log)
    }

    /// Append a calibration event.
    ///
    /// External calibrations must name the provider. The log date may not
    /// precede the track's last recorded event; `Pass` and `ConditionalPass`
    /// advance the calibration track, `Fail` does not.
    pub async fn append_calibration(
        &self,
        id: Uuid,
        entry: CreateCalibrationLog,
    ) -> AppResult<CalibrationLog> {
        if entry.provider == CalibrationProvider::External
            && entry
                .external_provider_name
                .as_deref()
                .map_or(true, |name| name.trim().is_empty())
        {
            return Err(AppError::Validation(
                "external_provider_name is required for external calibrations".to_string(),
            ));
        }

        let ledger = self.ledger(&id)?;
        let mut guard = ledger.write().await;

        if !guard.equipment.active {
            return Err(AppError::EquipmentUnavailable(format!(
                "Equipment {} is deactivated",
                id
            )));
        }

        if entry.date < guard.equipment.last_calibration_date {
            return Err(AppError::NonMonotonicDate(format!(
                "calibration log dated {} precedes last recorded calibration {}",
                entry.date, guard.equipment.last_calibration_date
            )));
        }

        let log = CalibrationLog {
            id: self.next_id(),
            equipment_id: id,
            date: entry.date,
            technician: entry.technician,
            provider: entry.provider,
            external_provider_name: entry.external_provider_name,
            result: entry.result,
            certificate_number: entry.certificate_number,
            valid_until: entry.valid_until,
        };
        guard.calibration_logs.push(log.clone());

        if matches!(
            log.result,
            CalibrationResult::Pass | CalibrationResult::ConditionalPass
        ) {
            guard.equipment.last_calibration_date = log.date;
        }

        Ok(log)
    }

    /// Set or clear the manual status override. Idempotent; clearing returns
    /// control to derived resolution.
    pub async fn set_manual_override(
        &self,
        id: Uuid,
        override_status: Option<EquipmentStatus>,
    ) -> AppResult<Equipment> {
        let ledger = self.ledger(&id)?;
        let mut guard = ledger.write().await;
        guard.equipment.manual_override_status = override_status;
        Ok(guard.equipment.clone())
    }

    /// Attach a document metadata pointer. Informational only.
    pub async fn attach_document(
        &self,
        id: Uuid,
        entry: AttachDocument,
    ) -> AppResult<EquipmentDocument> {
        let ledger = self.ledger(&id)?;
        let mut guard = ledger.write().await;

        if !guard.equipment.active {
            return Err(AppError::EquipmentUnavailable(format!(
                "Equipment {} is deactivated",
                id
            )));
        }

        let document = EquipmentDocument {
            id: self.next_id(),
            equipment_id: id,
            name: entry.name,
            document_type: entry.document_type,
            upload_date: entry.upload_date.unwrap_or_else(Utc::now),
            storage_url: entry.storage_url,
        };
        guard.documents.push(document.clone());

        Ok(document)
    }

    /// Deactivate an equipment record. Its ledger stays readable, all
    /// appends are rejected, and its serial number becomes reusable.
    /// Idempotent.
    pub async fn deactivate(&self, id: Uuid) -> AppResult<Equipment> {
        let ledger = self.ledger(&id)?;
        let mut guard = ledger.write().await;

        guard.equipment.active = false;
        self.serial_index
            .remove_if(&guard.equipment.serial_number, |_, mapped| *mapped == id);

        Ok(guard.equipment.clone())
    }

    pub async fn view(&self, id: Uuid, now: DateTime<Utc>) -> AppResult<EquipmentView> {
        let ledger = self.ledger(&id)?;
        let guard = ledger.read().await;
        Ok(guard.view(now))
    }

    /// Views of all equipment, sorted by name. Inactive records are skipped
    /// unless requested.
    pub async fn list_views(
        &self,
        now: DateTime<Utc>,
        include_inactive: bool,
    ) -> Vec<EquipmentView> {
        let ledgers: Vec<SharedEquipmentLedger> = self
            .ledgers
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        let mut views = Vec::with_capacity(ledgers.len());
        for ledger in ledgers {
            let guard = ledger.read().await;
            if include_inactive || guard.equipment.active {
                views.push(guard.view(now));
            }
        }
        views.sort_by(|a, b| a.equipment.name.cmp(&b.equipment.name));
        views
    }

    pub async fn usage_logs(&self, id: Uuid) -> AppResult<Vec<UsageLog>> {
        let ledger = self.ledger(&id)?;
        let guard = ledger.read().await;
        Ok(guard.usage_logs.clone())
    }

    pub async fn maintenance_logs(&self, id: Uuid) -> AppResult<Vec<MaintenanceLog>> {
        let ledger = self.ledger(&id)?;
        let guard = ledger.read().await;
        Ok(guard.maintenance_logs.clone())
    }

    pub async fn calibration_logs(&self, id: Uuid) -> AppResult<Vec<CalibrationLog>> {
        let ledger = self.ledger(&id)?;
        let guard = ledger.read().await;
        Ok(guard.calibration_logs.clone())
    }

    pub async fn documents(&self, id: Uuid) -> AppResult<Vec<EquipmentDocument>> {
        let ledger = self.ledger(&id)?;
        let guard = ledger.read().await;
        Ok(guard.documents.clone())
    }
}
