//! Season repository

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Season, SeasonStatus},
    storage::JsonStore,
};

const COLLECTION: &str = "seasons";

/// Repository for season storage operations
pub struct SeasonRepository;

impl SeasonRepository {
    /// List seasons, optionally filtered by status
    pub async fn find_all(
        store: &JsonStore,
        status: Option<SeasonStatus>,
    ) -> AppResult<Vec<Season>> {
        let mut seasons: Vec<Season> = store.load_collection(COLLECTION).await?;
        if let Some(status) = status {
            seasons.retain(|s| s.status == status);
        }
        Ok(seasons)
    }

    /// Find season by ID
    pub async fn find_by_id(store: &JsonStore, id: &Uuid) -> AppResult<Option<Season>> {
        let seasons: Vec<Season> = store.load_collection(COLLECTION).await?;
        Ok(seasons.into_iter().find(|s| s.id == *id))
    }

    /// Find the league's active season
    pub async fn find_active(store: &JsonStore) -> AppResult<Option<Season>> {
        let seasons: Vec<Season> = store.load_collection(COLLECTION).await?;
        Ok(seasons.into_iter().find(|s| s.is_active()))
    }

    /// Insert a new season
    pub async fn create(store: &JsonStore, season: Season) -> AppResult<Season> {
        let mut seasons: Vec<Season> = store.load_collection(COLLECTION).await?;
        seasons.push(season.clone());
        store.save_collection(COLLECTION, &seasons).await?;
        Ok(season)
    }

    /// Replace an existing season
    pub async fn update(store: &JsonStore, season: Season) -> AppResult<Season> {
        let mut seasons: Vec<Season> = store.load_collection(COLLECTION).await?;
        let slot = seasons
            .iter_mut()
            .find(|s| s.id == season.id)
            .ok_or_else(|| AppError::NotFound("Season not found".to_string()))?;
        *slot = season.clone();
        store.save_collection(COLLECTION, &seasons).await?;
        Ok(season)
    }

    /// Delete a season by ID
    pub async fn delete(store: &JsonStore, id: &Uuid) -> AppResult<()> {
        let mut seasons: Vec<Season> = store.load_collection(COLLECTION).await?;
        let before = seasons.len();
        seasons.retain(|s| s.id != *id);
        if seasons.len() == before {
            return Err(AppError::NotFound("Season not found".to_string()));
        }
        store.save_collection(COLLECTION, &seasons).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use tempfile::TempDir;

    use super::*;

    fn season(name: &str, status: SeasonStatus) -> Season {
        Season {
            id: Uuid::new_v4(),
            name: name.to_string(),
            status,
            start_date: Utc::now(),
            end_date: None,
            total_races: 0,
            races_completed: 0,
            total_participants: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_find_all_filters_by_status() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        SeasonRepository::create(&store, season("2024", SeasonStatus::Archived))
            .await
            .unwrap();
        SeasonRepository::create(&store, season("2025", SeasonStatus::Active))
            .await
            .unwrap();

        let all = SeasonRepository::find_all(&store, None).await.unwrap();
        assert_eq!(all.len(), 2);

        let archived = SeasonRepository::find_all(&store, Some(SeasonStatus::Archived))
            .await
            .unwrap();
        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].name, "2024");
    }

    #[tokio::test]
    async fn test_find_active_picks_the_active_season() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        SeasonRepository::create(&store, season("2023", SeasonStatus::Completed))
            .await
            .unwrap();
        let active = SeasonRepository::create(&store, season("2025", SeasonStatus::Active))
            .await
            .unwrap();

        let found = SeasonRepository::find_active(&store).await.unwrap().unwrap();
        assert_eq!(found.id, active.id);
    }

    #[tokio::test]
    async fn test_update_replaces_the_record() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        let mut created = SeasonRepository::create(&store, season("2025", SeasonStatus::Active))
            .await
            .unwrap();

        created.status = SeasonStatus::Completed;
        SeasonRepository::update(&store, created.clone()).await.unwrap();

        let found = SeasonRepository::find_by_id(&store, &created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.status, SeasonStatus::Completed);
        assert!(SeasonRepository::find_active(&store).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_season_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        let err = SeasonRepository::delete(&store, &Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
