//! Racer handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Racer, RacerStats},
    services::RacerService,
    state::AppState,
    utils::validation,
};

use super::{
    request::{CreateRacerRequest, ListRacersQuery, UpdateRacerRequest},
    response::RacerWithStats,
};

/// List all racers (with optional active filter)
pub async fn list_racers(
    State(state): State<AppState>,
    Query(query): Query<ListRacersQuery>,
) -> AppResult<Json<Vec<RacerWithStats>>> {
    let racers =
        RacerService::list_racers(state.store(), state.points_table(), query.active).await?;
    Ok(Json(racers))
}

/// Get a specific racer
pub async fn get_racer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Racer>> {
    let racer = RacerService::get_racer(state.store(), &id).await?;
    Ok(Json(racer))
}

/// Get a racer's stats in the active season
pub async fn get_racer_stats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Option<RacerStats>>> {
    let stats = RacerService::get_stats(state.store(), state.points_table(), &id).await?;
    Ok(Json(stats))
}

/// Register a new racer
pub async fn create_racer(
    State(state): State<AppState>,
    Json(payload): Json<CreateRacerRequest>,
) -> AppResult<(StatusCode, Json<Racer>)> {
    payload.validate()?;

    validation::validate_team_color(&payload.team_color)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let racer = RacerService::create_racer(state.store(), payload).await?;

    Ok((StatusCode::CREATED, Json(racer)))
}

/// Update a racer
pub async fn update_racer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRacerRequest>,
) -> AppResult<Json<Racer>> {
    payload.validate()?;

    if let Some(team_color) = &payload.team_color {
        validation::validate_team_color(team_color)
            .map_err(|e| AppError::Validation(e.to_string()))?;
    }

    let racer = RacerService::update_racer(state.store(), &id, payload).await?;

    Ok(Json(racer))
}

/// Delete a racer
pub async fn delete_racer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    RacerService::delete_racer(state.store(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
