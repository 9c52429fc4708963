//! Leaderboard service

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Leaderboard, LeaderboardEntry, Racer, Season},
    standings::{self, PointsTable, RacerTally},
    storage::{RaceReader, RacerReader, SeasonReader},
};

/// Computes season standings from storage reads.
///
/// The readers are injected so the pipeline itself stays independent of
/// the storage backend. Every call recomputes the full leaderboard from
/// the season's races; nothing is cached between requests.
pub struct LeaderboardService {
    seasons: Arc<dyn SeasonReader>,
    races: Arc<dyn RaceReader>,
    racers: Arc<dyn RacerReader>,
    points_table: PointsTable,
}

impl LeaderboardService {
    /// Create a service over the given readers and scoring table
    pub fn new(
        seasons: Arc<dyn SeasonReader>,
        races: Arc<dyn RaceReader>,
        racers: Arc<dyn RacerReader>,
        points_table: PointsTable,
    ) -> Self {
        Self {
            seasons,
            races,
            racers,
            points_table,
        }
    }

    /// Standings for the league's active season
    pub async fn current_season_leaderboard(&self) -> AppResult<Leaderboard> {
        let season = self
            .seasons
            .find_active_season()
            .await?
            .ok_or_else(|| AppError::NotFound("No active season found".to_string()))?;

        self.build_leaderboard(season).await
    }

    /// Standings for one season by ID
    pub async fn season_leaderboard(&self, season_id: &Uuid) -> AppResult<Leaderboard> {
        let season = self
            .seasons
            .find_season_by_id(season_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Season not found".to_string()))?;

        self.build_leaderboard(season).await
    }

    async fn build_leaderboard(&self, season: Season) -> AppResult<Leaderboard> {
        let races = self.races.find_races_by_season_id(&season.id).await?;
        if races.is_empty() {
            return Err(AppError::NotFound("No races found for season".to_string()));
        }

        let tallies = standings::aggregate(&races, &self.points_table);
        if tallies.is_empty() {
            return Err(AppError::NotFound(
                "No results recorded for season".to_string(),
            ));
        }

        let racer_ids: Vec<Uuid> = tallies.keys().copied().collect();
        let directory: HashMap<Uuid, Racer> = self
            .racers
            .find_racers_by_ids(&racer_ids)
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();
        if directory.is_empty() {
            return Err(AppError::NotFound(
                "No racers found for season results".to_string(),
            ));
        }

        let entries: Vec<LeaderboardEntry> = tallies
            .into_values()
            .map(|tally| to_entry(tally, &directory))
            .collect();

        Ok(Leaderboard {
            season_id: season.id,
            season_name: season.name,
            as_of_date: Utc::now(),
            standings: standings::rank(entries),
        })
    }
}

/// Join a tally with racer identity. A tally whose racer is missing from
/// the directory keeps a placeholder identity rather than dropping the
/// points it already earned.
fn to_entry(tally: RacerTally, directory: &HashMap<Uuid, Racer>) -> LeaderboardEntry {
    let (racer_name, team) = match directory.get(&tally.racer_id) {
        Some(racer) => (racer.name.clone(), racer.team.clone()),
        None => ("Unknown".to_string(), String::new()),
    };
    let avg_position = tally.avg_position();

    LeaderboardEntry {
        racer_id: tally.racer_id,
        racer_name,
        team,
        total_points: tally.total_points,
        races_participated: tally.races_participated,
        wins: tally.wins,
        podiums: tally.podiums,
        positions: tally.positions,
        avg_position,
    }
}
