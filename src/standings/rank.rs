//! Standings ordering

use crate::models::LeaderboardEntry;

/// Order standings entries best first.
///
/// Tie-break chain, applied until one criterion differs: total points
/// descending, average position ascending, wins descending, podiums
/// descending, racer name ascending. Racer id breaks the final tie so
/// the order never depends on map iteration order, even for two racers
/// sharing a name and identical statistics.
pub fn rank(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| {
        b.total_points
            .total_cmp(&a.total_points)
            .then_with(|| a.avg_position.total_cmp(&b.avg_position))
            .then_with(|| b.wins.cmp(&a.wins))
            .then_with(|| b.podiums.cmp(&a.podiums))
            .then_with(|| a.racer_name.cmp(&b.racer_name))
            .then_with(|| a.racer_id.cmp(&b.racer_id))
    });
    entries
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn entry(name: &str, points: f64, avg: f64, wins: u32, podiums: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            racer_id: Uuid::new_v4(),
            racer_name: name.to_string(),
            team: String::new(),
            total_points: points,
            races_participated: podiums.max(wins),
            wins,
            podiums,
            positions: Vec::new(),
            avg_position: avg,
        }
    }

    fn names(entries: &[LeaderboardEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.racer_name.as_str()).collect()
    }

    #[test]
    fn test_orders_by_total_points_descending() {
        let ranked = rank(vec![
            entry("Low", 10.0, 1.0, 1, 1),
            entry("High", 43.0, 3.0, 0, 0),
        ]);
        assert_eq!(names(&ranked), vec!["High", "Low"]);
    }

    #[test]
    fn test_points_tie_falls_to_avg_position() {
        let ranked = rank(vec![
            entry("Steady", 30.0, 2.5, 2, 2),
            entry("Sharp", 30.0, 1.5, 0, 1),
        ]);
        assert_eq!(names(&ranked), vec!["Sharp", "Steady"]);
    }

    #[test]
    fn test_avg_tie_falls_to_wins_then_podiums() {
        let ranked = rank(vec![
            entry("NoWin", 30.0, 2.0, 0, 2),
            entry("Winner", 30.0, 2.0, 1, 1),
        ]);
        assert_eq!(names(&ranked), vec!["Winner", "NoWin"]);

        let ranked = rank(vec![
            entry("OnePodium", 30.0, 2.0, 1, 1),
            entry("TwoPodiums", 30.0, 2.0, 1, 2),
        ]);
        assert_eq!(names(&ranked), vec!["TwoPodiums", "OnePodium"]);
    }

    #[test]
    fn test_full_statistical_tie_falls_to_name() {
        let ranked = rank(vec![
            entry("Bob", 43.0, 1.5, 1, 2),
            entry("Alice", 43.0, 1.5, 1, 2),
        ]);
        assert_eq!(names(&ranked), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_ranking_is_deterministic_across_input_orders() {
        let a = entry("Alice", 43.0, 1.5, 1, 2);
        let b = entry("Bob", 43.0, 1.5, 1, 2);
        let c = entry("Cara", 25.0, 1.0, 1, 1);

        let forward = rank(vec![a.clone(), b.clone(), c.clone()]);
        let reversed = rank(vec![c, b, a]);
        assert_eq!(names(&forward), names(&reversed));
        assert_eq!(names(&forward), vec!["Alice", "Bob", "Cara"]);
    }
}
