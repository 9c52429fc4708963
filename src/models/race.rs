//! Race model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One racer's finishing record within a race
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceResult {
    pub racer_id: Uuid,
    /// Finishing position, 1-based
    pub position: u32,
    pub points: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructor_points: Option<f64>,
}

/// A completed race and its full result set
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub id: Uuid,
    pub season_id: Uuid,
    pub name: String,
    /// Ordinal of the race within its season, 1-based
    pub race_number: u32,
    pub date: DateTime<Utc>,
    pub results: Vec<RaceResult>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
