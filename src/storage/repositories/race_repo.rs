//! Race repository

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::Race,
    storage::JsonStore,
};

const COLLECTION: &str = "races";

/// Repository for race storage operations
pub struct RaceRepository;

impl RaceRepository {
    /// All races of a season, ordered by race number
    pub async fn find_by_season_id(store: &JsonStore, season_id: &Uuid) -> AppResult<Vec<Race>> {
        let mut races: Vec<Race> = store.load_collection(COLLECTION).await?;
        races.retain(|r| r.season_id == *season_id);
        races.sort_by_key(|r| r.race_number);
        Ok(races)
    }

    /// Find race by ID
    pub async fn find_by_id(store: &JsonStore, id: &Uuid) -> AppResult<Option<Race>> {
        let races: Vec<Race> = store.load_collection(COLLECTION).await?;
        Ok(races.into_iter().find(|r| r.id == *id))
    }

    /// Insert a new race
    pub async fn create(store: &JsonStore, race: Race) -> AppResult<Race> {
        let mut races: Vec<Race> = store.load_collection(COLLECTION).await?;
        races.push(race.clone());
        store.save_collection(COLLECTION, &races).await?;
        Ok(race)
    }

    /// Replace an existing race
    pub async fn update(store: &JsonStore, race: Race) -> AppResult<Race> {
        let mut races: Vec<Race> = store.load_collection(COLLECTION).await?;
        let slot = races
            .iter_mut()
            .find(|r| r.id == race.id)
            .ok_or_else(|| AppError::NotFound("Race not found".to_string()))?;
        *slot = race.clone();
        store.save_collection(COLLECTION, &races).await?;
        Ok(race)
    }

    /// Delete a race by ID
    pub async fn delete(store: &JsonStore, id: &Uuid) -> AppResult<()> {
        let mut races: Vec<Race> = store.load_collection(COLLECTION).await?;
        let before = races.len();
        races.retain(|r| r.id != *id);
        if races.len() == before {
            return Err(AppError::NotFound("Race not found".to_string()));
        }
        store.save_collection(COLLECTION, &races).await?;
        Ok(())
    }
}
