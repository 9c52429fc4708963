//! Leaderboard model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One racer's row in the season standings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub racer_id: Uuid,
    pub racer_name: String,
    pub team: String,
    pub total_points: f64,
    pub races_participated: u32,
    pub wins: u32,
    pub podiums: u32,
    /// Finishing positions in aggregation order
    pub positions: Vec<u32>,
    pub avg_position: f64,
}

/// Full season standings at a point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub season_id: Uuid,
    pub season_name: String,
    pub as_of_date: DateTime<Utc>,
    pub standings: Vec<LeaderboardEntry>,
}
