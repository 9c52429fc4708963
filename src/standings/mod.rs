//! Season standings engine
//!
//! Turns a season's race results into a ranked championship table:
//!
//! 1. **Scoring** (`scoring.rs`): position-to-points lookup with a
//!    configurable table.
//! 2. **Validation** (`validate.rs`): structural checks on a race's result
//!    set before it is trusted by aggregation.
//! 3. **Aggregation** (`aggregate.rs`): folds every result of every race
//!    into per-racer running totals.
//! 4. **Ranking** (`rank.rs`): deterministic total order over the
//!    aggregated entries.
//!
//! The whole pipeline is pure and synchronous. Data fetching and the final
//! leaderboard assembly live in the leaderboard service.

pub mod aggregate;
pub mod rank;
pub mod scoring;
pub mod validate;

pub use aggregate::{RacerTally, aggregate};
pub use rank::rank;
pub use scoring::PointsTable;
pub use validate::{ValidationResult, validate_race_results};
