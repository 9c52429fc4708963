//! Season request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_SEASON_NAME_LENGTH;
use crate::models::SeasonStatus;

/// Create season request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSeasonRequest {
    #[validate(length(min = 1, max = MAX_SEASON_NAME_LENGTH))]
    pub name: String,

    /// Initial status; a new season starts active unless stated otherwise
    pub status: Option<SeasonStatus>,

    pub start_date: DateTime<Utc>,

    pub end_date: Option<DateTime<Utc>>,
}

/// Update season request
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSeasonRequest {
    #[validate(length(min = 1, max = MAX_SEASON_NAME_LENGTH))]
    pub name: Option<String>,

    pub status: Option<SeasonStatus>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub total_races: Option<u32>,
    pub races_completed: Option<u32>,
    pub total_participants: Option<u32>,
}

/// List seasons query parameters
#[derive(Debug, Deserialize)]
pub struct ListSeasonsQuery {
    pub status: Option<SeasonStatus>,
}
