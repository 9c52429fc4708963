//! Narrow read interfaces for the standings pipeline
//!
//! The leaderboard service depends on these traits instead of concrete
//! repositories, so its callers choose the data source and tests can
//! substitute mocks.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Race, Racer, Season},
    storage::{JsonStore, RaceRepository, RacerRepository, SeasonRepository},
};

/// Read access to seasons
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeasonReader: Send + Sync {
    /// The league's single active season, if any
    async fn find_active_season(&self) -> AppResult<Option<Season>>;

    /// Season by ID
    async fn find_season_by_id(&self, id: &Uuid) -> AppResult<Option<Season>>;
}

/// Read access to a season's races
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RaceReader: Send + Sync {
    /// All races of a season, ordered by race number
    async fn find_races_by_season_id(&self, season_id: &Uuid) -> AppResult<Vec<Race>>;
}

/// Read access to racer identity data
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RacerReader: Send + Sync {
    /// Racers matching the given IDs; unknown IDs are skipped
    async fn find_racers_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Racer>>;
}

/// Store-backed season reads
#[derive(Debug, Clone)]
pub struct JsonSeasonReader {
    store: JsonStore,
}

impl JsonSeasonReader {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SeasonReader for JsonSeasonReader {
    async fn find_active_season(&self) -> AppResult<Option<Season>> {
        SeasonRepository::find_active(&self.store).await
    }

    async fn find_season_by_id(&self, id: &Uuid) -> AppResult<Option<Season>> {
        SeasonRepository::find_by_id(&self.store, id).await
    }
}

/// Store-backed race reads
#[derive(Debug, Clone)]
pub struct JsonRaceReader {
    store: JsonStore,
}

impl JsonRaceReader {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RaceReader for JsonRaceReader {
    async fn find_races_by_season_id(&self, season_id: &Uuid) -> AppResult<Vec<Race>> {
        RaceRepository::find_by_season_id(&self.store, season_id).await
    }
}

/// Store-backed racer reads
#[derive(Debug, Clone)]
pub struct JsonRacerReader {
    store: JsonStore,
}

impl JsonRacerReader {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RacerReader for JsonRacerReader {
    async fn find_racers_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Racer>> {
        RacerRepository::find_by_ids(&self.store, ids).await
    }
}
