//! Race request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::MAX_RACE_NAME_LENGTH;

/// One finishing result as submitted by the caller.
///
/// Points are never accepted from the wire; they are stamped from the
/// league's points table when the race is written.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceResultInput {
    pub racer_id: Uuid,

    /// Finishing position, 1-based
    pub position: u32,

    pub constructor_points: Option<f64>,
}

/// Create race request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRaceRequest {
    pub season_id: Uuid,

    #[validate(length(min = 1, max = MAX_RACE_NAME_LENGTH))]
    pub name: String,

    /// Position of the race within the season calendar
    pub race_number: u32,

    pub date: DateTime<Utc>,

    pub results: Vec<RaceResultInput>,
}

/// Update race request.
///
/// The race number is fixed at creation; a new result set replaces the
/// stored one wholesale.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRaceRequest {
    #[validate(length(min = 1, max = MAX_RACE_NAME_LENGTH))]
    pub name: Option<String>,

    pub date: Option<DateTime<Utc>>,

    pub results: Option<Vec<RaceResultInput>>,
}

/// List races query parameters
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRacesQuery {
    pub season_id: Option<Uuid>,
}
