//! JSON collection files

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;

use crate::error::AppResult;

/// File-backed JSON storage.
///
/// Each collection lives in its own pretty-printed JSON file under the
/// data directory and is loaded in full on every read. This store
/// targets development-scale data; concurrent writers are not
/// coordinated.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Create a store rooted at the given directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create the data directory if it does not exist
    pub async fn initialize(&self) -> AppResult<()> {
        fs::create_dir_all(&self.data_dir).await?;
        Ok(())
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{collection}.json"))
    }

    /// Load a whole collection; a missing file reads as an empty one
    pub async fn load_collection<T: DeserializeOwned>(&self, collection: &str) -> AppResult<Vec<T>> {
        let path = self.collection_path(collection);
        match fs::read(&path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace a whole collection on disk
    pub async fn save_collection<T: Serialize>(
        &self,
        collection: &str,
        records: &[T],
    ) -> AppResult<()> {
        let path = self.collection_path(collection);
        let json = serde_json::to_vec_pretty(records)?;
        fs::write(&path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use tempfile::TempDir;
    use tokio_test::assert_ok;

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: u32,
        label: String,
    }

    #[tokio::test]
    async fn test_initialize_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join("data");
        let store = JsonStore::new(&nested);
        assert_ok!(store.initialize().await);
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn test_missing_collection_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        let records: Vec<Record> = store.load_collection("absent").await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        let records = vec![
            Record {
                id: 1,
                label: "first".to_string(),
            },
            Record {
                id: 2,
                label: "second".to_string(),
            },
        ];

        store.save_collection("records", &records).await.unwrap();
        let loaded: Vec<Record> = store.load_collection("records").await.unwrap();
        assert_eq!(loaded, records);
    }

    #[tokio::test]
    async fn test_corrupt_collection_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        tokio::fs::write(dir.path().join("broken.json"), b"not json")
            .await
            .unwrap();
        let loaded: AppResult<Vec<Record>> = store.load_collection("broken").await;
        assert!(loaded.is_err());
    }
}
