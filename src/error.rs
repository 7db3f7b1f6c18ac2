//! Error types for LabTrack server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::models::LogId;

/// Application error codes exposed to API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    NoSuchEquipment = 2,
    DuplicateSerialNumber = 3,
    InvalidInterval = 4,
    UsageOverlap = 5,
    EquipmentUnavailable = 6,
    NonMonotonicDate = 7,
    NonPositiveFrequency = 8,
    BadValue = 9,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate serial number: {0}")]
    DuplicateSerialNumber(String),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Usage interval overlaps existing log {conflicting_log_id}")]
    Overlap { conflicting_log_id: LogId },

    #[error("Equipment unavailable: {0}")]
    EquipmentUnavailable(String),

    #[error("Non-monotonic date: {0}")]
    NonMonotonicDate(String),

    #[error("Non-positive frequency: {0}")]
    NonPositiveFrequency(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
    /// Log that a rejected usage interval collides with, when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicting_log_id: Option<LogId>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut conflicting_log_id = None;

        let (status, code, message) = match &self {
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchEquipment, msg.clone())
            }
            AppError::DuplicateSerialNumber(serial) => (
                StatusCode::CONFLICT,
                ErrorCode::DuplicateSerialNumber,
                format!("Serial number already registered: {}", serial),
            ),
            AppError::InvalidInterval(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidInterval, msg.clone())
            }
            AppError::Overlap { conflicting_log_id: id } => {
                conflicting_log_id = Some(*id);
                (
                    StatusCode::CONFLICT,
                    ErrorCode::UsageOverlap,
                    format!("Usage interval overlaps existing log {}", id),
                )
            }
            AppError::EquipmentUnavailable(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorCode::EquipmentUnavailable,
                msg.clone(),
            ),
            AppError::NonMonotonicDate(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorCode::NonMonotonicDate,
                msg.clone(),
            ),
            AppError::NonPositiveFrequency(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::NonPositiveFrequency,
                msg.clone(),
            ),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
            conflicting_log_id,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
