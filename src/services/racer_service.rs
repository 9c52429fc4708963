//! Racer service

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    handlers::racers::request::{CreateRacerRequest, UpdateRacerRequest},
    handlers::racers::response::RacerWithStats,
    models::{Racer, RacerStats},
    standings::{self, PointsTable, RacerTally},
    storage::{JsonStore, RaceRepository, RacerRepository, SeasonRepository},
};

/// Racer service for business logic
pub struct RacerService;

impl RacerService {
    /// All racers, each paired with their stats in the active season
    pub async fn list_racers(
        store: &JsonStore,
        points_table: &PointsTable,
        active: Option<bool>,
    ) -> AppResult<Vec<RacerWithStats>> {
        let racers = RacerRepository::find_all(store, active).await?;
        let tallies = Self::active_season_tallies(store, points_table).await?;

        Ok(racers
            .into_iter()
            .map(|racer| {
                let stats = tallies.get(&racer.id).map(Self::to_stats);
                RacerWithStats::new(racer, stats)
            })
            .collect())
    }

    /// Get racer by ID
    pub async fn get_racer(store: &JsonStore, id: &Uuid) -> AppResult<Racer> {
        RacerRepository::find_by_id(store, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Racer not found".to_string()))
    }

    /// A racer's stats in the active season, or None if they have no
    /// results there
    pub async fn get_stats(
        store: &JsonStore,
        points_table: &PointsTable,
        id: &Uuid,
    ) -> AppResult<Option<RacerStats>> {
        Self::get_racer(store, id).await?;
        let tallies = Self::active_season_tallies(store, points_table).await?;
        Ok(tallies.get(id).map(Self::to_stats))
    }

    /// Create a racer; ID and join date are stamped here
    pub async fn create_racer(store: &JsonStore, payload: CreateRacerRequest) -> AppResult<Racer> {
        let now = Utc::now();
        let racer = Racer {
            id: Uuid::new_v4(),
            name: payload.name,
            active: payload.active.unwrap_or(true),
            join_date: now,
            team: payload.team,
            team_color: payload.team_color,
            nationality: payload.nationality,
            age: payload.age,
            badge_url: payload.badge_url,
            profile_url: payload.profile_url,
            created_at: now,
            updated_at: now,
        };

        RacerRepository::create(store, racer).await
    }

    /// Update a racer
    pub async fn update_racer(
        store: &JsonStore,
        id: &Uuid,
        payload: UpdateRacerRequest,
    ) -> AppResult<Racer> {
        let mut racer = Self::get_racer(store, id).await?;

        if let Some(name) = payload.name {
            racer.name = name;
        }
        if let Some(active) = payload.active {
            racer.active = active;
        }
        if let Some(team) = payload.team {
            racer.team = team;
        }
        if let Some(team_color) = payload.team_color {
            racer.team_color = team_color;
        }
        if let Some(nationality) = payload.nationality {
            racer.nationality = nationality;
        }
        if let Some(age) = payload.age {
            racer.age = age;
        }
        if let Some(badge_url) = payload.badge_url {
            racer.badge_url = Some(badge_url);
        }
        if let Some(profile_url) = payload.profile_url {
            racer.profile_url = Some(profile_url);
        }
        racer.updated_at = Utc::now();

        RacerRepository::update(store, racer).await
    }

    /// Delete a racer
    pub async fn delete_racer(store: &JsonStore, id: &Uuid) -> AppResult<()> {
        Self::get_racer(store, id).await?;
        RacerRepository::delete(store, id).await
    }

    /// Tallies for the active season, empty when no season is active
    async fn active_season_tallies(
        store: &JsonStore,
        points_table: &PointsTable,
    ) -> AppResult<HashMap<Uuid, RacerTally>> {
        let Some(season) = SeasonRepository::find_active(store).await? else {
            return Ok(HashMap::new());
        };
        let races = RaceRepository::find_by_season_id(store, &season.id).await?;
        Ok(standings::aggregate(&races, points_table))
    }

    fn to_stats(tally: &RacerTally) -> RacerStats {
        RacerStats {
            total_races: tally.races_participated,
            wins: tally.wins,
            podiums: tally.podiums,
            avg_position: tally.avg_position(),
            total_points: tally.total_points,
        }
    }
}
