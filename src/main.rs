//! Raceboard - Application Entry Point
//!
//! This is the main entry point for the Raceboard server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use raceboard::{
    config::CONFIG,
    constants::API_BASE_PATH,
    handlers,
    middleware::request_logging,
    services::LeaderboardService,
    standings::PointsTable,
    state::AppState,
    storage::{JsonRaceReader, JsonRacerReader, JsonSeasonReader, JsonStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Raceboard server...");

    // Prepare the JSON file store
    tracing::info!(data_dir = %CONFIG.storage.data_dir.display(), "Preparing data directory...");
    let store = JsonStore::new(CONFIG.storage.data_dir.clone());
    store.initialize().await?;

    // Championship points table, with an optional override from the environment
    let points_table = CONFIG
        .league
        .points_table
        .clone()
        .map(PointsTable::new)
        .unwrap_or_default();

    // Wire the leaderboard service to the JSON-backed readers
    let leaderboard = LeaderboardService::new(
        Arc::new(JsonSeasonReader::new(store.clone())),
        Arc::new(JsonRaceReader::new(store.clone())),
        Arc::new(JsonRacerReader::new(store.clone())),
        points_table.clone(),
    );

    // Create application state
    let state = AppState::new(store, leaderboard, points_table, CONFIG.clone());

    // Build the router
    let app = Router::new()
        .nest(API_BASE_PATH, handlers::routes())
        .layer(axum::middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
