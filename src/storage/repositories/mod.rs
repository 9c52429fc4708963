//! Typed repositories over the JSON store
//!
//! Repositories handle all direct collection access.

pub mod race_repo;
pub mod racer_repo;
pub mod season_repo;

pub use race_repo::RaceRepository;
pub use racer_repo::RacerRepository;
pub use season_repo::SeasonRepository;
