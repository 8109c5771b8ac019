//! Match-lifetime win tally

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::verdict::Winner;

/// Scoreboard key for drawn rounds
pub const TIE_BUCKET: &str = "Tie";

/// Win counts keyed by contestant display name, plus the tie bucket.
///
/// Buckets are fixed at construction; each completed round increments at
/// most one of them (none on an indeterminate verdict).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scoreboard {
    wins: BTreeMap<String, u32>,
}

impl Scoreboard {
    /// Create a scoreboard with both contestants and the tie bucket at zero
    pub fn new(name_1: &str, name_2: &str) -> Self {
        let mut wins = BTreeMap::new();
        wins.insert(name_1.to_string(), 0);
        wins.insert(name_2.to_string(), 0);
        wins.insert(TIE_BUCKET.to_string(), 0);
        Self { wins }
    }

    /// Credit a round outcome. Returns whether a bucket was incremented
    /// (false for [`Winner::Unknown`] or a name outside the scoreboard).
    pub fn record(&mut self, winner: &Winner) -> bool {
        let bucket = match winner {
            Winner::Contestant(name) => name.as_str(),
            Winner::Tie => TIE_BUCKET,
            Winner::Unknown => return false,
        };
        match self.wins.get_mut(bucket) {
            Some(count) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    /// Wins recorded for a contestant (or the tie bucket)
    pub fn wins(&self, name: &str) -> u32 {
        self.wins.get(name).copied().unwrap_or(0)
    }

    /// Drawn rounds
    pub fn ties(&self) -> u32 {
        self.wins(TIE_BUCKET)
    }

    /// Total credited rounds across all buckets
    pub fn total(&self) -> u32 {
        self.wins.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let board = Scoreboard::new("Alpha", "Beta");
        assert_eq!(board.wins("Alpha"), 0);
        assert_eq!(board.wins("Beta"), 0);
        assert_eq!(board.ties(), 0);
        assert_eq!(board.total(), 0);
    }

    #[test]
    fn test_record_each_outcome_once() {
        let mut board = Scoreboard::new("Alpha", "Beta");

        assert!(board.record(&Winner::Contestant("Alpha".to_string())));
        assert!(board.record(&Winner::Tie));
        assert!(!board.record(&Winner::Unknown));

        assert_eq!(board.wins("Alpha"), 1);
        assert_eq!(board.wins("Beta"), 0);
        assert_eq!(board.ties(), 1);
        assert_eq!(board.total(), 2);
    }

    #[test]
    fn test_unknown_contestant_not_credited() {
        let mut board = Scoreboard::new("Alpha", "Beta");
        assert!(!board.record(&Winner::Contestant("Gamma".to_string())));
        assert_eq!(board.total(), 0);
    }

    #[test]
    fn test_total_bounded_by_rounds() {
        let mut board = Scoreboard::new("Alpha", "Beta");
        let outcomes = [
            Winner::Contestant("Alpha".to_string()),
            Winner::Unknown,
            Winner::Tie,
            Winner::Contestant("Beta".to_string()),
            Winner::Unknown,
        ];
        for outcome in &outcomes {
            board.record(outcome);
        }
        // 5 rounds, 2 indeterminate
        assert_eq!(board.total(), 3);
    }
}
