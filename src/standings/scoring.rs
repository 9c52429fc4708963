//! Championship points lookup

use std::collections::HashMap;

use crate::constants::DEFAULT_POINTS;

/// Points awarded per finishing position.
///
/// Leagues may configure their own table; positions outside the table
/// always score zero.
#[derive(Debug, Clone)]
pub struct PointsTable {
    points: HashMap<u32, f64>,
}

impl PointsTable {
    /// Create a table from explicit position/points pairs
    pub fn new(points: HashMap<u32, f64>) -> Self {
        Self { points }
    }

    /// Points for a finishing position
    pub fn points_for(&self, position: u32) -> f64 {
        self.points.get(&position).copied().unwrap_or(0.0)
    }
}

impl Default for PointsTable {
    fn default() -> Self {
        Self {
            points: DEFAULT_POINTS.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_values() {
        let table = PointsTable::default();
        assert_eq!(table.points_for(1), 25.0);
        assert_eq!(table.points_for(2), 18.0);
        assert_eq!(table.points_for(3), 15.0);
        assert_eq!(table.points_for(9), 2.0);
    }

    #[test]
    fn test_position_outside_table_scores_zero() {
        let table = PointsTable::default();
        assert_eq!(table.points_for(10), 0.0);
        assert_eq!(table.points_for(99), 0.0);
    }

    #[test]
    fn test_custom_table() {
        let table = PointsTable::new(HashMap::from([(1, 10.0), (2, 6.0)]));
        assert_eq!(table.points_for(1), 10.0);
        assert_eq!(table.points_for(2), 6.0);
        assert_eq!(table.points_for(3), 0.0);
    }
}
