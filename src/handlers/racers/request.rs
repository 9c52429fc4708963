//! Racer request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{
    MAX_NATIONALITY_LENGTH, MAX_RACER_AGE, MAX_RACER_NAME_LENGTH, MAX_TEAM_NAME_LENGTH,
    MIN_RACER_AGE,
};

/// Create racer request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRacerRequest {
    #[validate(length(min = 1, max = MAX_RACER_NAME_LENGTH))]
    pub name: String,

    /// Whether the racer takes part in the current season; defaults to true
    pub active: Option<bool>,

    #[validate(length(min = 1, max = MAX_TEAM_NAME_LENGTH))]
    pub team: String,

    /// Team livery colour as a hex code, e.g. `#d32f2f`
    pub team_color: String,

    #[validate(length(min = 1, max = MAX_NATIONALITY_LENGTH))]
    pub nationality: String,

    #[validate(range(min = MIN_RACER_AGE, max = MAX_RACER_AGE))]
    pub age: u32,

    #[validate(url)]
    pub badge_url: Option<String>,

    #[validate(url)]
    pub profile_url: Option<String>,
}

/// Update racer request
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRacerRequest {
    #[validate(length(min = 1, max = MAX_RACER_NAME_LENGTH))]
    pub name: Option<String>,

    pub active: Option<bool>,

    #[validate(length(min = 1, max = MAX_TEAM_NAME_LENGTH))]
    pub team: Option<String>,

    pub team_color: Option<String>,

    #[validate(length(min = 1, max = MAX_NATIONALITY_LENGTH))]
    pub nationality: Option<String>,

    #[validate(range(min = MIN_RACER_AGE, max = MAX_RACER_AGE))]
    pub age: Option<u32>,

    #[validate(url)]
    pub badge_url: Option<String>,

    #[validate(url)]
    pub profile_url: Option<String>,
}

/// List racers query parameters
#[derive(Debug, Deserialize)]
pub struct ListRacersQuery {
    pub active: Option<bool>,
}
