//! Race service

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    handlers::races::request::{CreateRaceRequest, RaceResultInput, UpdateRaceRequest},
    models::{Race, RaceResult},
    standings::{PointsTable, validate_race_results},
    storage::{JsonStore, RaceRepository, SeasonRepository},
};

/// Race service for business logic
pub struct RaceService;

impl RaceService {
    /// All races of a season, ordered by race number
    pub async fn list_races(store: &JsonStore, season_id: &Uuid) -> AppResult<Vec<Race>> {
        RaceRepository::find_by_season_id(store, season_id).await
    }

    /// Get race by ID
    pub async fn get_race(store: &JsonStore, id: &Uuid) -> AppResult<Race> {
        RaceRepository::find_by_id(store, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Race with ID {id} not found")))
    }

    /// Create a race with a validated, points-stamped result set
    pub async fn create_race(
        store: &JsonStore,
        points_table: &PointsTable,
        payload: CreateRaceRequest,
    ) -> AppResult<Race> {
        SeasonRepository::find_by_id(store, &payload.season_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Season not found".to_string()))?;

        let results = Self::build_results(points_table, payload.results)?;

        let now = Utc::now();
        let race = Race {
            id: Uuid::new_v4(),
            season_id: payload.season_id,
            name: payload.name,
            race_number: payload.race_number,
            date: payload.date,
            results,
            created_at: now,
            updated_at: now,
        };

        RaceRepository::create(store, race).await
    }

    /// Update a race; a new result set replaces the old one wholesale
    pub async fn update_race(
        store: &JsonStore,
        points_table: &PointsTable,
        id: &Uuid,
        payload: UpdateRaceRequest,
    ) -> AppResult<Race> {
        let mut race = Self::get_race(store, id).await?;

        if let Some(name) = payload.name {
            race.name = name;
        }
        if let Some(date) = payload.date {
            race.date = date;
        }
        if let Some(results) = payload.results {
            race.results = Self::build_results(points_table, results)?;
        }
        race.updated_at = Utc::now();

        RaceRepository::update(store, race).await
    }

    /// Delete a race
    pub async fn delete_race(store: &JsonStore, id: &Uuid) -> AppResult<()> {
        Self::get_race(store, id).await?;
        RaceRepository::delete(store, id).await
    }

    /// Stamp points from the scoring table, then validate the whole set.
    /// An invalid set is rejected before anything is written.
    fn build_results(
        points_table: &PointsTable,
        inputs: Vec<RaceResultInput>,
    ) -> AppResult<Vec<RaceResult>> {
        let results: Vec<RaceResult> = inputs
            .into_iter()
            .map(|input| RaceResult {
                racer_id: input.racer_id,
                position: input.position,
                points: points_table.points_for(input.position),
                constructor_points: input.constructor_points,
            })
            .collect();

        let outcome = validate_race_results(&results);
        if !outcome.valid {
            return Err(AppError::ResultsValidation(outcome.errors));
        }

        Ok(results)
    }
}
