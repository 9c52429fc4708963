//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod health;
pub mod leaderboard;
pub mod racers;
pub mod races;
pub mod seasons;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/leaderboard", leaderboard::routes())
        .nest("/seasons", seasons::routes())
        .nest("/races", races::routes())
        .nest("/racers", racers::routes())
}
