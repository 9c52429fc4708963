//! Race handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::Race,
    services::RaceService,
    state::AppState,
};

use super::request::{CreateRaceRequest, ListRacesQuery, UpdateRaceRequest};

/// List the races of a season
pub async fn list_races(
    State(state): State<AppState>,
    Query(query): Query<ListRacesQuery>,
) -> AppResult<Json<Vec<Race>>> {
    let season_id = query
        .season_id
        .ok_or_else(|| AppError::InvalidInput("seasonId query parameter is required".to_string()))?;

    let races = RaceService::list_races(state.store(), &season_id).await?;
    Ok(Json(races))
}

/// Get a specific race
pub async fn get_race(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Race>> {
    let race = RaceService::get_race(state.store(), &id).await?;
    Ok(Json(race))
}

/// Record a new race
pub async fn create_race(
    State(state): State<AppState>,
    Json(payload): Json<CreateRaceRequest>,
) -> AppResult<(StatusCode, Json<Race>)> {
    payload.validate()?;

    let race = RaceService::create_race(state.store(), state.points_table(), payload).await?;

    Ok((StatusCode::CREATED, Json(race)))
}

/// Update a race
pub async fn update_race(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRaceRequest>,
) -> AppResult<Json<Race>> {
    payload.validate()?;

    let race = RaceService::update_race(state.store(), state.points_table(), &id, payload).await?;

    Ok(Json(race))
}

/// Delete a race
pub async fn delete_race(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    RaceService::delete_race(state.store(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
