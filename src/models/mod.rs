//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod leaderboard;
pub mod race;
pub mod racer;
pub mod season;

pub use leaderboard::*;
pub use race::*;
pub use racer::*;
pub use season::*;
