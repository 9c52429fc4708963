//! Season response DTOs

use serde::Serialize;

use crate::models::Season;

/// Season paired with live counts derived from its recorded races
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonWithStats {
    #[serde(flatten)]
    pub season: Season,

    /// Races recorded for this season so far
    pub race_count: u32,

    /// Distinct racers across those races
    pub participant_count: u32,
}

impl SeasonWithStats {
    pub fn new(season: Season, race_count: u32, participant_count: u32) -> Self {
        Self {
            season,
            race_count,
            participant_count,
        }
    }
}
