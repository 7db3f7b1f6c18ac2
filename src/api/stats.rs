//! Statistics endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::Urgency;

/// Fleet summary response
#[derive(Debug, Serialize, ToSchema)]
pub struct FleetStats {
    /// Total registered equipment (including deactivated)
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
    /// Derived status counts across active equipment
    pub status: StatusCounts,
    /// Calibration track urgency counts across active equipment
    pub calibration: TrackCounts,
    /// Maintenance track urgency counts across active equipment
    pub maintenance: TrackCounts,
}

#[derive(Debug, Default, Serialize, ToSchema)]
pub struct StatusCounts {
    pub operational: i64,
    pub under_maintenance: i64,
    pub out_of_service: i64,
    pub calibration_required: i64,
}

#[derive(Debug, Default, Serialize, ToSchema)]
pub struct TrackCounts {
    pub current: i64,
    pub due_soon: i64,
    pub overdue: i64,
}

impl TrackCounts {
    pub fn tally(&mut self, urgency: Urgency) {
        match urgency {
            Urgency::Current => self.current += 1,
            Urgency::DueSoon => self.due_soon += 1,
            Urgency::Overdue => self.overdue += 1,
        }
    }
}

/// Query parameters for GET /stats
#[derive(Debug, Deserialize, IntoParams)]
pub struct StatsQuery {
    /// Evaluate statuses and urgencies at this instant (defaults to the
    /// server clock)
    pub now: Option<DateTime<Utc>>,
}

/// Fleet summary statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    params(StatsQuery),
    responses(
        (status = 200, description = "Fleet statistics", body = FleetStats)
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    Query(query): Query<StatsQuery>,
) -> Json<FleetStats> {
    let now = query.now.unwrap_or_else(Utc::now);
    Json(state.services.equipment.stats(now).await)
}
