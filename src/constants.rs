//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// STORAGE DEFAULTS
// =============================================================================

/// Default directory for the JSON collection files
pub const DEFAULT_DATA_DIR: &str = "data";

// =============================================================================
// RACE CONSTRAINTS
// =============================================================================

/// Minimum number of racers in a race result set
pub const MIN_RACERS_PER_RACE: usize = 2;

/// Maximum number of racers in a race result set
pub const MAX_RACERS_PER_RACE: usize = 9;

// =============================================================================
// SCORING
// =============================================================================

/// Finishing position that counts as a race win
pub const WIN_POSITION: u32 = 1;

/// Finishing positions up to and including this value count as a podium
pub const PODIUM_THRESHOLD: u32 = 3;

/// Default championship points per finishing position.
///
/// Positions outside this table score zero.
pub const DEFAULT_POINTS: &[(u32, f64)] = &[
    (1, 25.0),
    (2, 18.0),
    (3, 15.0),
    (4, 12.0),
    (5, 10.0),
    (6, 8.0),
    (7, 6.0),
    (8, 4.0),
    (9, 2.0),
];

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum season name length
pub const MAX_SEASON_NAME_LENGTH: u64 = 128;

/// Maximum race name length
pub const MAX_RACE_NAME_LENGTH: u64 = 128;

/// Maximum racer name length
pub const MAX_RACER_NAME_LENGTH: u64 = 128;

/// Maximum team name length
pub const MAX_TEAM_NAME_LENGTH: u64 = 128;

/// Maximum nationality length
pub const MAX_NATIONALITY_LENGTH: u64 = 64;

/// Minimum racer age
pub const MIN_RACER_AGE: u32 = 16;

/// Maximum racer age
pub const MAX_RACER_AGE: u32 = 80;
