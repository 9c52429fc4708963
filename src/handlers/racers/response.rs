//! Racer response DTOs

use serde::Serialize;

use crate::models::{Racer, RacerStats};

/// Racer paired with their stats in the active season.
///
/// `stats` is null for racers with no results there, which is distinct
/// from a racer whose results happen to sum to zero.
#[derive(Debug, Serialize)]
pub struct RacerWithStats {
    #[serde(flatten)]
    pub racer: Racer,

    pub stats: Option<RacerStats>,
}

impl RacerWithStats {
    pub fn new(racer: Racer, stats: Option<RacerStats>) -> Self {
        Self { racer, stats }
    }
}
