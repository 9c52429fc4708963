//! Championship standings handlers

mod handler;

pub use handler::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Leaderboard routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(handler::get_current_leaderboard))
        .route("/season/{id}", get(handler::get_season_leaderboard))
}
