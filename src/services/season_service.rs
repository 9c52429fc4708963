//! Season service

use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    handlers::seasons::{
        request::{CreateSeasonRequest, UpdateSeasonRequest},
        response::SeasonWithStats,
    },
    models::{Season, SeasonStatus},
    storage::{JsonStore, RaceRepository, SeasonRepository},
};

/// Season service for business logic
pub struct SeasonService;

impl SeasonService {
    /// List seasons with live race and participant counts
    pub async fn list_seasons(
        store: &JsonStore,
        status: Option<SeasonStatus>,
    ) -> AppResult<Vec<SeasonWithStats>> {
        let seasons = SeasonRepository::find_all(store, status).await?;

        let summaries: Vec<SeasonWithStats> = futures::future::try_join_all(
            seasons.into_iter().map(|s| Self::to_season_with_stats(store, s)),
        )
        .await?;

        Ok(summaries)
    }

    /// Get the league's active season
    pub async fn get_active_season(store: &JsonStore) -> AppResult<Season> {
        SeasonRepository::find_active(store)
            .await?
            .ok_or_else(|| AppError::NotFound("No active season found".to_string()))
    }

    /// Get season by ID
    pub async fn get_season(store: &JsonStore, id: &Uuid) -> AppResult<Season> {
        SeasonRepository::find_by_id(store, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Season not found".to_string()))
    }

    /// Create a new season
    pub async fn create_season(
        store: &JsonStore,
        payload: CreateSeasonRequest,
    ) -> AppResult<Season> {
        let status = payload.status.unwrap_or(SeasonStatus::Active);
        if status == SeasonStatus::Active {
            Self::ensure_no_other_active_season(store, None).await?;
        }

        let now = Utc::now();
        let season = Season {
            id: Uuid::new_v4(),
            name: payload.name,
            status,
            start_date: payload.start_date,
            end_date: payload.end_date,
            total_races: 0,
            races_completed: 0,
            total_participants: 0,
            created_at: now,
            updated_at: now,
        };

        SeasonRepository::create(store, season).await
    }

    /// Update an existing season
    pub async fn update_season(
        store: &JsonStore,
        id: &Uuid,
        payload: UpdateSeasonRequest,
    ) -> AppResult<Season> {
        let mut season = Self::get_season(store, id).await?;

        if let Some(status) = payload.status {
            if status == SeasonStatus::Active && !season.is_active() {
                Self::ensure_no_other_active_season(store, Some(id)).await?;
            }
            season.status = status;
        }
        if let Some(name) = payload.name {
            season.name = name;
        }
        if let Some(start_date) = payload.start_date {
            season.start_date = start_date;
        }
        if let Some(end_date) = payload.end_date {
            season.end_date = Some(end_date);
        }
        if let Some(total_races) = payload.total_races {
            season.total_races = total_races;
        }
        if let Some(races_completed) = payload.races_completed {
            season.races_completed = races_completed;
        }
        if let Some(total_participants) = payload.total_participants {
            season.total_participants = total_participants;
        }
        season.updated_at = Utc::now();

        SeasonRepository::update(store, season).await
    }

    /// Delete a season
    pub async fn delete_season(store: &JsonStore, id: &Uuid) -> AppResult<()> {
        Self::get_season(store, id).await?;
        SeasonRepository::delete(store, id).await
    }

    /// Reject a write that would leave the league with two active seasons
    async fn ensure_no_other_active_season(
        store: &JsonStore,
        exclude: Option<&Uuid>,
    ) -> AppResult<()> {
        if let Some(active) = SeasonRepository::find_active(store).await? {
            if exclude != Some(&active.id) {
                return Err(AppError::Conflict(
                    "An active season already exists".to_string(),
                ));
            }
        }
        Ok(())
    }

    async fn to_season_with_stats(store: &JsonStore, season: Season) -> AppResult<SeasonWithStats> {
        let races = RaceRepository::find_by_season_id(store, &season.id).await?;
        let race_count = races.len() as u32;
        let participants: HashSet<Uuid> = races
            .iter()
            .flat_map(|race| race.results.iter().map(|result| result.racer_id))
            .collect();

        Ok(SeasonWithStats::new(season, race_count, participants.len() as u32))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use tempfile::TempDir;

    use super::*;
    use crate::models::{Race, RaceResult};
    use crate::storage::JsonStore;

    fn create_request(name: &str, status: SeasonStatus) -> CreateSeasonRequest {
        CreateSeasonRequest {
            name: name.to_string(),
            status: Some(status),
            start_date: Utc::now(),
            end_date: None,
        }
    }

    fn race(season_id: Uuid, race_number: u32, racer_ids: &[Uuid]) -> Race {
        Race {
            id: Uuid::new_v4(),
            season_id,
            name: format!("Round {race_number}"),
            race_number,
            date: Utc::now(),
            results: racer_ids
                .iter()
                .enumerate()
                .map(|(i, racer_id)| RaceResult {
                    racer_id: *racer_id,
                    position: i as u32 + 1,
                    points: 0.0,
                    constructor_points: None,
                })
                .collect(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_second_active_season_is_a_conflict() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());

        SeasonService::create_season(&store, create_request("2025", SeasonStatus::Active))
            .await
            .unwrap();

        let err = SeasonService::create_season(&store, create_request("2026", SeasonStatus::Active))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        // A non-active season can still be created
        SeasonService::create_season(&store, create_request("2026", SeasonStatus::Completed))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_reactivating_the_same_season_is_allowed() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());

        let created =
            SeasonService::create_season(&store, create_request("2025", SeasonStatus::Active))
                .await
                .unwrap();

        let payload = UpdateSeasonRequest {
            name: Some("2025 Championship".to_string()),
            status: Some(SeasonStatus::Active),
            ..Default::default()
        };
        let updated = SeasonService::update_season(&store, &created.id, payload)
            .await
            .unwrap();
        assert_eq!(updated.name, "2025 Championship");
        assert!(updated.is_active());
    }

    #[tokio::test]
    async fn test_activating_a_second_season_is_a_conflict() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());

        SeasonService::create_season(&store, create_request("2025", SeasonStatus::Active))
            .await
            .unwrap();
        let completed =
            SeasonService::create_season(&store, create_request("2024", SeasonStatus::Completed))
                .await
                .unwrap();

        let payload = UpdateSeasonRequest {
            status: Some(SeasonStatus::Active),
            ..Default::default()
        };
        let err = SeasonService::update_season(&store, &completed.id, payload)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_list_seasons_carries_live_counts() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());

        let created =
            SeasonService::create_season(&store, create_request("2025", SeasonStatus::Active))
                .await
                .unwrap();

        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let cara = Uuid::new_v4();
        crate::storage::RaceRepository::create(&store, race(created.id, 1, &[alice, bob]))
            .await
            .unwrap();
        crate::storage::RaceRepository::create(&store, race(created.id, 2, &[bob, cara]))
            .await
            .unwrap();

        let seasons = SeasonService::list_seasons(&store, None).await.unwrap();
        assert_eq!(seasons.len(), 1);
        assert_eq!(seasons[0].race_count, 2);
        assert_eq!(seasons[0].participant_count, 3);
    }
}
