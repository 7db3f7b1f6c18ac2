//! Equipment lifecycle ledger and derived-status scheduling engine.
//!
//! `schedule` and `interval` and `status` are stateless pure functions;
//! `store` owns all mutable state and serializes mutations per equipment.

mod interval;
mod schedule;
mod status;
mod store;

pub use interval::validate_interval;
pub use schedule::{compute_urgency, DUE_SOON_WINDOW_DAYS};
pub use status::resolve_status;
pub use store::{EquipmentLedger, LedgerStore, SharedEquipmentLedger};
