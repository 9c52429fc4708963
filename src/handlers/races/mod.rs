//! Race management handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Race routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_races))
        .route("/", post(handler::create_race))
        .route("/{id}", get(handler::get_race))
        .route("/{id}", put(handler::update_race))
        .route("/{id}", delete(handler::delete_race))
}
