//! Business logic services

pub mod equipment;

use std::sync::Arc;

use crate::ledger::LedgerStore;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentLifecycleService,
}

impl Services {
    /// Create all services over a fresh ledger store
    pub fn new() -> Self {
        let store = Arc::new(LedgerStore::new());
        Self {
            equipment: equipment::EquipmentLifecycleService::new(store),
        }
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new()
    }
}
