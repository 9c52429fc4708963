//! Racer model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// League racer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Racer {
    pub id: Uuid,
    pub name: String,
    pub active: bool,
    pub join_date: DateTime<Utc>,
    pub team: String,
    pub team_color: String,
    pub nationality: String,
    pub age: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A racer's aggregate results for one season
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RacerStats {
    pub total_races: u32,
    pub wins: u32,
    pub podiums: u32,
    pub avg_position: f64,
    pub total_points: f64,
}
