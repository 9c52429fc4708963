//! Business logic services

pub mod leaderboard_service;
pub mod race_service;
pub mod racer_service;
pub mod season_service;

pub use leaderboard_service::LeaderboardService;
pub use race_service::RaceService;
pub use racer_service::RacerService;
pub use season_service::SeasonService;
