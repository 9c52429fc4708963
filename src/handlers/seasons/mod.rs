//! Season management handlers

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

/// Season routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_seasons))
        .route("/", post(handler::create_season))
        .route("/active", get(handler::get_active_season))
        .route("/{id}", get(handler::get_season))
        .route("/{id}", put(handler::update_season))
        .route("/{id}", delete(handler::delete_season))
}
