//! Racer repository

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::Racer,
    storage::JsonStore,
};

const COLLECTION: &str = "racers";

/// Repository for racer storage operations
pub struct RacerRepository;

impl RacerRepository {
    /// List racers sorted by name, optionally filtered by active flag
    pub async fn find_all(store: &JsonStore, active: Option<bool>) -> AppResult<Vec<Racer>> {
        let mut racers: Vec<Racer> = store.load_collection(COLLECTION).await?;
        if let Some(active) = active {
            racers.retain(|r| r.active == active);
        }
        racers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(racers)
    }

    /// Find racer by ID
    pub async fn find_by_id(store: &JsonStore, id: &Uuid) -> AppResult<Option<Racer>> {
        let racers: Vec<Racer> = store.load_collection(COLLECTION).await?;
        Ok(racers.into_iter().find(|r| r.id == *id))
    }

    /// Racers matching the given IDs; unknown IDs are skipped
    pub async fn find_by_ids(store: &JsonStore, ids: &[Uuid]) -> AppResult<Vec<Racer>> {
        let mut racers: Vec<Racer> = store.load_collection(COLLECTION).await?;
        racers.retain(|r| ids.contains(&r.id));
        Ok(racers)
    }

    /// Insert a new racer
    pub async fn create(store: &JsonStore, racer: Racer) -> AppResult<Racer> {
        let mut racers: Vec<Racer> = store.load_collection(COLLECTION).await?;
        racers.push(racer.clone());
        store.save_collection(COLLECTION, &racers).await?;
        Ok(racer)
    }

    /// Replace an existing racer
    pub async fn update(store: &JsonStore, racer: Racer) -> AppResult<Racer> {
        let mut racers: Vec<Racer> = store.load_collection(COLLECTION).await?;
        let slot = racers
            .iter_mut()
            .find(|r| r.id == racer.id)
            .ok_or_else(|| AppError::NotFound("Racer not found".to_string()))?;
        *slot = racer.clone();
        store.save_collection(COLLECTION, &racers).await?;
        Ok(racer)
    }

    /// Delete a racer by ID
    pub async fn delete(store: &JsonStore, id: &Uuid) -> AppResult<()> {
        let mut racers: Vec<Racer> = store.load_collection(COLLECTION).await?;
        let before = racers.len();
        racers.retain(|r| r.id != *id);
        if racers.len() == before {
            return Err(AppError::NotFound("Racer not found".to_string()));
        }
        store.save_collection(COLLECTION, &racers).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use tempfile::TempDir;

    use super::*;

    fn racer(name: &str, active: bool) -> Racer {
        Racer {
            id: Uuid::new_v4(),
            name: name.to_string(),
            active,
            join_date: Utc::now(),
            team: "Test Team".to_string(),
            team_color: "#ff0000".to_string(),
            nationality: "GB".to_string(),
            age: 30,
            badge_url: None,
            profile_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_find_all_sorts_by_name() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        RacerRepository::create(&store, racer("Cara", true)).await.unwrap();
        RacerRepository::create(&store, racer("Alice", true)).await.unwrap();
        RacerRepository::create(&store, racer("Bob", true)).await.unwrap();

        let racers = RacerRepository::find_all(&store, None).await.unwrap();
        let names: Vec<&str> = racers.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Cara"]);
    }

    #[tokio::test]
    async fn test_find_all_filters_by_active_flag() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        RacerRepository::create(&store, racer("Alice", true)).await.unwrap();
        RacerRepository::create(&store, racer("Bob", false)).await.unwrap();

        let active = RacerRepository::find_all(&store, Some(true)).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Alice");

        let retired = RacerRepository::find_all(&store, Some(false)).await.unwrap();
        assert_eq!(retired.len(), 1);
        assert_eq!(retired[0].name, "Bob");
    }

    #[tokio::test]
    async fn test_find_by_ids_skips_unknown_ids() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        let alice = RacerRepository::create(&store, racer("Alice", true)).await.unwrap();
        RacerRepository::create(&store, racer("Bob", true)).await.unwrap();

        let found = RacerRepository::find_by_ids(&store, &[alice.id, Uuid::new_v4()])
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, alice.id);
    }
}
