//! Season handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::Season,
    services::SeasonService,
    state::AppState,
    utils::validation,
};

use super::{
    request::{CreateSeasonRequest, ListSeasonsQuery, UpdateSeasonRequest},
    response::SeasonWithStats,
};

/// List all seasons (with optional status filter)
pub async fn list_seasons(
    State(state): State<AppState>,
    Query(query): Query<ListSeasonsQuery>,
) -> AppResult<Json<Vec<SeasonWithStats>>> {
    let seasons = SeasonService::list_seasons(state.store(), query.status).await?;
    Ok(Json(seasons))
}

/// Get the league's active season
pub async fn get_active_season(State(state): State<AppState>) -> AppResult<Json<Season>> {
    let season = SeasonService::get_active_season(state.store()).await?;
    Ok(Json(season))
}

/// Get a specific season
pub async fn get_season(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Season>> {
    let season = SeasonService::get_season(state.store(), &id).await?;
    Ok(Json(season))
}

/// Create a new season
pub async fn create_season(
    State(state): State<AppState>,
    Json(payload): Json<CreateSeasonRequest>,
) -> AppResult<(StatusCode, Json<Season>)> {
    payload.validate()?;

    if let Some(end_date) = &payload.end_date {
        validation::validate_season_dates(&payload.start_date, end_date)
            .map_err(|e| AppError::Validation(e.to_string()))?;
    }

    let season = SeasonService::create_season(state.store(), payload).await?;

    Ok((StatusCode::CREATED, Json(season)))
}

/// Update a season
pub async fn update_season(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSeasonRequest>,
) -> AppResult<Json<Season>> {
    payload.validate()?;

    if let (Some(start_date), Some(end_date)) = (&payload.start_date, &payload.end_date) {
        validation::validate_season_dates(start_date, end_date)
            .map_err(|e| AppError::Validation(e.to_string()))?;
    }

    let season = SeasonService::update_season(state.store(), &id, payload).await?;

    Ok(Json(season))
}

/// Delete a season
pub async fn delete_season(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    SeasonService::delete_season(state.store(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
