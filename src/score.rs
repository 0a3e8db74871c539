//! Scoring, level and fall-speed progression

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base points for a line clear; `n` lines at once pay n^2 times this
pub const LINE_SCORE_BASE: u64 = 100;
/// Points per level step
pub const POINTS_PER_LEVEL: u64 = 1000;
/// Gravity threshold at level 1
pub const BASE_FALL_INTERVAL: Duration = Duration::from_millis(1000);
/// Gravity threshold reduction per level gained
pub const FALL_INTERVAL_STEP: Duration = Duration::from_millis(50);
/// The fastest gravity ever gets
pub const MIN_FALL_INTERVAL: Duration = Duration::from_millis(500);

/// Score and level tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Current points
    pub points: u64,
    /// Current level, starts at 1 and never decreases
    pub level: u32,
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}

impl Score {
    pub fn new() -> Self {
        Self { points: 0, level: 1 }
    }

    /// Record a lock that cleared `lines` rows.
    ///
    /// Multi-line clears pay super-linearly: 1/2/3/4 lines yield
    /// 100/400/900/1600 points. The level is then recomputed from total
    /// points, one level per 1000.
    pub fn add_clear(&mut self, lines: usize) {
        let lines = lines as u64;
        self.points += lines * lines * LINE_SCORE_BASE;
        self.level = (self.points / POINTS_PER_LEVEL) as u32 + 1;
    }

    /// Gravity threshold for the current level: 1s at level 1, 50ms
    /// faster per level, floored at 500ms.
    pub fn fall_interval(&self) -> Duration {
        BASE_FALL_INTERVAL
            .saturating_sub(FALL_INTERVAL_STEP * (self.level - 1))
            .max(MIN_FALL_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_score() {
        let score = Score::new();
        assert_eq!(score.points, 0);
        assert_eq!(score.level, 1);
        assert_eq!(score.fall_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_multi_line_clears_pay_super_linearly() {
        for (lines, expected) in [(1, 100), (2, 400), (3, 900), (4, 1600)] {
            let mut score = Score::new();
            score.add_clear(lines);
            assert_eq!(score.points, expected);
        }
    }

    #[test]
    fn test_zero_line_lock_is_free() {
        let mut score = Score::new();
        score.add_clear(0);
        assert_eq!(score.points, 0);
        assert_eq!(score.level, 1);
    }

    #[test]
    fn test_level_tracks_points() {
        let mut score = Score::new();
        score.add_clear(3); // 900
        assert_eq!(score.level, 1);
        score.add_clear(4); // 2500
        assert_eq!(score.level, 3);
    }

    #[test]
    fn test_fall_interval_shrinks_with_level() {
        let mut previous = Duration::MAX;
        for level in 1..=30 {
            let score = Score { points: 0, level };
            let interval = score.fall_interval();
            assert!(interval <= previous);
            previous = interval;
        }
    }

    #[test]
    fn test_fall_interval_floors_at_half_a_second() {
        let score = Score { points: 0, level: 11 };
        assert_eq!(score.fall_interval(), Duration::from_millis(500));
        let score = Score { points: 0, level: 40 };
        assert_eq!(score.fall_interval(), Duration::from_millis(500));
    }
}
