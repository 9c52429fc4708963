//! Raceboard - Racing League Management Server
//!
//! This library provides the core functionality for Raceboard, a server
//! that manages racing-league seasons, races and racers and computes
//! championship standings from recorded race results.
//!
//! # Features
//!
//! - Season lifecycle with a single active season at a time
//! - Race results validated and scored against a configurable points table
//! - Championship leaderboards recomputed from raw results on every read
//! - Racer registry with per-season statistics
//! - Durable JSON file storage, one file per collection
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Standings**: Pure scoring, validation, aggregation and ranking
//! - **Storage**: JSON file persistence and read interfaces
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod standings;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
