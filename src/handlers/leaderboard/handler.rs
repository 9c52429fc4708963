//! Leaderboard handler implementations

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{error::AppResult, models::Leaderboard, state::AppState};

/// Standings for the active season
pub async fn get_current_leaderboard(
    State(state): State<AppState>,
) -> AppResult<Json<Leaderboard>> {
    let leaderboard = state.leaderboard().current_season_leaderboard().await?;
    Ok(Json(leaderboard))
}

/// Standings for a specific season
pub async fn get_season_leaderboard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Leaderboard>> {
    let leaderboard = state.leaderboard().season_leaderboard(&id).await?;
    Ok(Json(leaderboard))
}
