//! Race result aggregation

use std::collections::HashMap;

use uuid::Uuid;

use crate::constants::{PODIUM_THRESHOLD, WIN_POSITION};
use crate::models::Race;
use crate::standings::scoring::PointsTable;

/// One racer's running totals across the races folded so far
#[derive(Debug, Clone)]
pub struct RacerTally {
    pub racer_id: Uuid,
    pub total_points: f64,
    pub races_participated: u32,
    pub wins: u32,
    pub podiums: u32,
    pub positions: Vec<u32>,
}

impl RacerTally {
    fn new(racer_id: Uuid) -> Self {
        Self {
            racer_id,
            total_points: 0.0,
            races_participated: 0,
            wins: 0,
            podiums: 0,
            positions: Vec::new(),
        }
    }

    /// Mean finishing position, rounded to two decimals
    pub fn avg_position(&self) -> f64 {
        if self.positions.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.positions.iter().sum();
        let avg = f64::from(sum) / self.positions.len() as f64;
        (avg * 100.0).round() / 100.0
    }
}

/// Fold every result of every race into per-racer totals.
///
/// Points are recomputed from finishing positions via the given table;
/// stored per-result points are ignored so standings always reflect the
/// current scoring configuration. A racer who appears in no race gets
/// no entry. Fold order only affects the internal order of `positions`,
/// which no derived statistic depends on.
pub fn aggregate(races: &[Race], points_table: &PointsTable) -> HashMap<Uuid, RacerTally> {
    let mut standings: HashMap<Uuid, RacerTally> = HashMap::new();

    for race in races {
        for result in &race.results {
            let tally = standings
                .entry(result.racer_id)
                .or_insert_with(|| RacerTally::new(result.racer_id));

            tally.total_points += points_table.points_for(result.position);
            tally.races_participated += 1;
            tally.positions.push(result.position);

            if result.position == WIN_POSITION {
                tally.wins += 1;
            }
            if result.position <= PODIUM_THRESHOLD {
                tally.podiums += 1;
            }
        }
    }

    standings
}
