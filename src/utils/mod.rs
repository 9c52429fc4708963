//! Utility functions

pub mod validation;

pub use validation::{validate_season_dates, validate_team_color};
