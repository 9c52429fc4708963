//! Racer management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Racer routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_racers))
        .route("/", post(handler::create_racer))
        .route("/{id}", get(handler::get_racer))
        .route("/{id}", put(handler::update_racer))
        .route("/{id}", delete(handler::delete_racer))
        .route("/{id}/stats", get(handler::get_racer_stats))
}
