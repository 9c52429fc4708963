//! Race result validation

use std::collections::HashSet;

use uuid::Uuid;

use crate::constants::{MAX_RACERS_PER_RACE, MIN_RACERS_PER_RACE};
use crate::models::RaceResult;

/// Outcome of validating one race's result set
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Check a race's result set for structural correctness.
///
/// Every rule is checked and every violation collected; the caller gets
/// the full list, never just the first failure.
pub fn validate_race_results(results: &[RaceResult]) -> ValidationResult {
    let mut errors = Vec::new();

    // Check racer count
    if results.len() < MIN_RACERS_PER_RACE || results.len() > MAX_RACERS_PER_RACE {
        errors.push("Race must have between 2 and 9 racers".to_string());
    }

    // Check for duplicate racers
    let unique_racers: HashSet<Uuid> = results.iter().map(|r| r.racer_id).collect();
    if unique_racers.len() != results.len() {
        errors.push("Duplicate racers are not allowed".to_string());
    }

    // Check for duplicate positions
    let positions: Vec<u32> = results.iter().map(|r| r.position).collect();
    let unique_positions: HashSet<u32> = positions.iter().copied().collect();
    if unique_positions.len() != positions.len() {
        errors.push("Duplicate positions are not allowed".to_string());
    }

    // Check positions are sequential starting from 1
    let mut sorted_positions = positions;
    sorted_positions.sort_unstable();
    for (i, position) in sorted_positions.iter().enumerate() {
        if *position != i as u32 + 1 {
            errors.push("Positions must be sequential starting from 1".to_string());
            break;
        }
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(racer_id: Uuid, position: u32) -> RaceResult {
        RaceResult {
            racer_id,
            position,
            points: 0.0,
            constructor_points: None,
        }
    }

    fn results_with_positions(positions: &[u32]) -> Vec<RaceResult> {
        positions.iter().map(|p| result(Uuid::new_v4(), *p)).collect()
    }

    #[test]
    fn test_valid_result_set() {
        let outcome = validate_race_results(&results_with_positions(&[1, 2, 3]));
        assert!(outcome.valid);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_too_few_racers() {
        let outcome = validate_race_results(&results_with_positions(&[1]));
        assert!(!outcome.valid);
        assert_eq!(outcome.errors, vec!["Race must have between 2 and 9 racers"]);
    }

    #[test]
    fn test_too_many_racers() {
        let positions: Vec<u32> = (1..=10).collect();
        let outcome = validate_race_results(&results_with_positions(&positions));
        assert!(!outcome.valid);
        assert_eq!(outcome.errors, vec!["Race must have between 2 and 9 racers"]);
    }

    #[test]
    fn test_duplicate_racers() {
        let racer = Uuid::new_v4();
        let results = vec![result(racer, 1), result(racer, 2)];
        let outcome = validate_race_results(&results);
        assert!(!outcome.valid);
        assert_eq!(outcome.errors, vec!["Duplicate racers are not allowed"]);
    }

    #[test]
    fn test_duplicate_positions() {
        let outcome = validate_race_results(&results_with_positions(&[1, 1]));
        assert!(!outcome.valid);
        assert!(
            outcome
                .errors
                .contains(&"Duplicate positions are not allowed".to_string())
        );
    }

    #[test]
    fn test_positions_must_start_at_one() {
        let outcome = validate_race_results(&results_with_positions(&[2, 3, 4]));
        assert!(!outcome.valid);
        assert_eq!(
            outcome.errors,
            vec!["Positions must be sequential starting from 1"]
        );
    }

    #[test]
    fn test_positions_must_have_no_gaps() {
        let outcome = validate_race_results(&results_with_positions(&[1, 2, 4]));
        assert!(!outcome.valid);
        assert_eq!(
            outcome.errors,
            vec!["Positions must be sequential starting from 1"]
        );
    }

    #[test]
    fn test_sequential_error_reported_once() {
        let outcome = validate_race_results(&results_with_positions(&[5, 6, 7]));
        let count = outcome
            .errors
            .iter()
            .filter(|e| *e == "Positions must be sequential starting from 1")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_all_violations_are_collected() {
        // Eleven entries with a duplicated position breaks the size rule,
        // the uniqueness rule and the sequence rule at once.
        let mut positions: Vec<u32> = (1..=10).collect();
        positions.push(5);
        let outcome = validate_race_results(&results_with_positions(&positions));
        assert!(!outcome.valid);
        assert!(
            outcome
                .errors
                .contains(&"Race must have between 2 and 9 racers".to_string())
        );
        assert!(
            outcome
                .errors
                .contains(&"Duplicate positions are not allowed".to_string())
        );
        assert!(
            outcome
                .errors
                .contains(&"Positions must be sequential starting from 1".to_string())
        );
    }
}
