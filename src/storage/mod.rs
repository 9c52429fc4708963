//! JSON file storage
//!
//! This module handles the collection files on disk, the typed
//! repositories over them, and the narrow read interfaces consumed by
//! the standings pipeline.

pub mod json_store;
pub mod readers;
pub mod repositories;

pub use json_store::JsonStore;
pub use readers::{
    JsonRaceReader, JsonRacerReader, JsonSeasonReader, RaceReader, RacerReader, SeasonReader,
};
pub use repositories::{RaceRepository, RacerRepository, SeasonRepository};
