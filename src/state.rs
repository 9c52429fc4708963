//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::config::Config;
use crate::services::LeaderboardService;
use crate::standings::PointsTable;
use crate::storage::JsonStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// JSON file store
    pub store: JsonStore,

    /// Standings assembly service
    pub leaderboard: LeaderboardService,

    /// Championship points table
    pub points_table: PointsTable,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        store: JsonStore,
        leaderboard: LeaderboardService,
        points_table: PointsTable,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                leaderboard,
                points_table,
                config,
            }),
        }
    }

    /// Get a reference to the JSON store
    pub fn store(&self) -> &JsonStore {
        &self.inner.store
    }

    /// Get a reference to the leaderboard service
    pub fn leaderboard(&self) -> &LeaderboardService {
        &self.inner.leaderboard
    }

    /// Get a reference to the points table
    pub fn points_table(&self) -> &PointsTable {
        &self.inner.points_table
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
