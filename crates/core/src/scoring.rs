//! Scoring module - fixed reward table per lock
//!
//! A lock awards points for the lines it cleared, looked up in
//! [`LINE_SCORES`](crate::types::LINE_SCORES). There is no level multiplier,
//! no combo and no drop bonus.

use crate::types::LINE_SCORES;

/// Points for clearing `lines` rows with a single lock.
///
/// Counts with no table entry award 0; the table is never extrapolated.
pub fn line_clear_score(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Running totals of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTally {
    pub score: u32,
    pub lines: u32,
}

impl ScoreTally {
    /// Record one lock and return the points it awarded
    pub fn record_lock(&mut self, lines: usize) -> u32 {
        let points = line_clear_score(lines);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines as u32);
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 300);
        assert_eq!(line_clear_score(3), 500);
        assert_eq!(line_clear_score(4), 800);
    }

    #[test]
    fn test_counts_outside_table_award_nothing() {
        assert_eq!(line_clear_score(5), 0);
        assert_eq!(line_clear_score(20), 0);
    }

    #[test]
    fn test_tally_accumulates() {
        let mut tally = ScoreTally::default();
        assert_eq!(tally.record_lock(0), 0);
        assert_eq!(tally.record_lock(2), 300);
        assert_eq!(tally.record_lock(4), 800);
        assert_eq!(tally, ScoreTally { score: 1100, lines: 6 });
    }
}
