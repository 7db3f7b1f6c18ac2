//! LabTrack Laboratory Equipment Lifecycle Server
//!
//! A Rust implementation of the LabTrack equipment lifecycle backend,
//! providing a REST JSON API over an append-only equipment ledger with
//! derived operational status and due-date scheduling.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
