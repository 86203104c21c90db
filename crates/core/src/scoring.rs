//! Scoring module - line-clear points, level progression and gravity speed
//!
//! Rules:
//! - A lock that clears `n` rows scores `LINE_SCORES[n] * level`, using the
//!   level in effect before this clear.
//! - Levels start at 1. Each time cumulative lines reach
//!   `level * lines_per_level`, the level goes up by one.
//! - After `k` level-ups the gravity period is
//!   `max(min_drop_ms, round(base_drop_ms * drop_decay^k))`.
//!
//! All counters only ever grow.

use tracing::info;

use crate::config::EngineConfig;
use crate::types::{LINE_SCORES, START_LEVEL};

/// Points for clearing `lines` rows at `level`. Zero outside the table.
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    LINE_SCORES
        .get(lines)
        .map_or(0, |&base| base.saturating_mul(level))
}

/// Gravity period after `level_ups` level increments.
pub fn drop_interval_ms(level_ups: u32, base_ms: u32, min_ms: u32, decay: f64) -> u32 {
    let exp = level_ups.min(i32::MAX as u32) as i32;
    let scaled = (base_ms as f64 * decay.powi(exp)).round();
    // `as` saturates on overflow and maps NaN to 0; the floor covers both.
    (scaled as u32).max(min_ms)
}

/// Tuning for level progression, taken from [`EngineConfig`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelRules {
    pub base_drop_ms: u32,
    pub min_drop_ms: u32,
    pub drop_decay: f64,
    pub lines_per_level: u32,
}

impl From<&EngineConfig> for LevelRules {
    fn from(cfg: &EngineConfig) -> Self {
        Self {
            base_drop_ms: cfg.base_drop_ms,
            min_drop_ms: cfg.min_drop_ms,
            drop_decay: cfg.drop_decay,
            lines_per_level: cfg.lines_per_level,
        }
    }
}

impl Default for LevelRules {
    fn default() -> Self {
        Self::from(&EngineConfig::default())
    }
}

/// What one lock's line clear did to the counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearOutcome {
    pub score_gained: u32,
    pub level_ups: u32,
}

/// Session score, lines, level and gravity period
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    score: u32,
    lines: u32,
    level: u32,
    drop_interval_ms: u32,
    rules: LevelRules,
}

impl Progress {
    pub fn new(rules: LevelRules) -> Self {
        Self {
            score: 0,
            lines: 0,
            level: START_LEVEL,
            drop_interval_ms: drop_interval_ms(
                0,
                rules.base_drop_ms,
                rules.min_drop_ms,
                rules.drop_decay,
            ),
            rules,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Apply the result of one lock that cleared `cleared` rows.
    pub fn record_clear(&mut self, cleared: usize) -> ClearOutcome {
        if cleared == 0 {
            return ClearOutcome::default();
        }

        let score_gained = calculate_line_score(cleared, self.level);
        self.score = self.score.saturating_add(score_gained);
        self.lines = self.lines.saturating_add(cleared as u32);

        let mut level_ups = 0;
        while self.level < u32::MAX
            && self.lines >= self.level.saturating_mul(self.rules.lines_per_level)
        {
            self.level += 1;
            level_ups += 1;
        }

        if level_ups > 0 {
            self.drop_interval_ms = drop_interval_ms(
                self.level - START_LEVEL,
                self.rules.base_drop_ms,
                self.rules.min_drop_ms,
                self.rules.drop_decay,
            );
            info!(
                level = self.level,
                drop_interval_ms = self.drop_interval_ms,
                "level up"
            );
        }

        ClearOutcome {
            score_gained,
            level_ups,
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(LevelRules::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_score_table() {
        assert_eq!(calculate_line_score(0, 1), 0);
        assert_eq!(calculate_line_score(1, 1), 40);
        assert_eq!(calculate_line_score(2, 1), 100);
        assert_eq!(calculate_line_score(3, 1), 300);
        assert_eq!(calculate_line_score(4, 1), 1200);
        assert_eq!(calculate_line_score(5, 1), 0);
    }

    #[test]
    fn test_line_score_scales_with_level() {
        for level in 1..=12 {
            for (n, base) in [(1, 40), (2, 100), (3, 300), (4, 1200)] {
                assert_eq!(calculate_line_score(n, level), base * level);
            }
        }
    }

    #[test]
    fn test_drop_interval_curve() {
        assert_eq!(drop_interval_ms(0, 800, 80, 0.85), 800);
        assert_eq!(drop_interval_ms(1, 800, 80, 0.85), 680);
        assert_eq!(drop_interval_ms(2, 800, 80, 0.85), 578);
        assert_eq!(drop_interval_ms(3, 800, 80, 0.85), 491);
        assert_eq!(drop_interval_ms(4, 800, 80, 0.85), 418);
    }

    #[test]
    fn test_drop_interval_floor() {
        assert_eq!(drop_interval_ms(14, 800, 80, 0.85), 82);
        assert_eq!(drop_interval_ms(15, 800, 80, 0.85), 80);
        assert_eq!(drop_interval_ms(1_000, 800, 80, 0.85), 80);
        assert_eq!(drop_interval_ms(u32::MAX, 800, 80, 0.85), 80);
    }

    #[test]
    fn test_drop_interval_never_increases() {
        let mut prev = u32::MAX;
        for k in 0..40 {
            let now = drop_interval_ms(k, 800, 80, 0.85);
            assert!(now <= prev);
            assert!(now >= 80);
            prev = now;
        }
    }

    #[test]
    fn test_progress_starts_at_level_one() {
        let p = Progress::default();
        assert_eq!((p.score(), p.lines(), p.level()), (0, 0, 1));
        assert_eq!(p.drop_interval_ms(), 800);
    }

    #[test]
    fn test_progress_scores_with_pre_clear_level() {
        let mut p = Progress::default();
        for _ in 0..9 {
            p.record_clear(1);
        }
        assert_eq!(p.level(), 1);
        assert_eq!(p.score(), 9 * 40);

        // 9 + 4 = 13 lines: the tetris is scored at level 1, then level becomes 2.
        let outcome = p.record_clear(4);
        assert_eq!(outcome.score_gained, 1200);
        assert_eq!(outcome.level_ups, 1);
        assert_eq!(p.level(), 2);
        assert_eq!(p.drop_interval_ms(), 680);

        // Next clear is worth double.
        assert_eq!(p.record_clear(1).score_gained, 80);
    }

    #[test]
    fn test_one_level_per_ten_lines() {
        let mut p = Progress::default();
        let mut ups = 0;
        for i in 1..=100u32 {
            ups += p.record_clear(1).level_ups;
            assert_eq!(p.level(), 1 + i / 10, "after {i} lines");
        }
        assert_eq!(ups, 10);
        assert_eq!(p.drop_interval_ms(), drop_interval_ms(10, 800, 80, 0.85));
    }

    #[test]
    fn test_zero_clear_changes_nothing() {
        let mut p = Progress::default();
        let before = p;
        assert_eq!(p.record_clear(0), ClearOutcome::default());
        assert_eq!(p, before);
    }

    #[test]
    fn test_small_lines_per_level_can_jump_several_levels() {
        let mut p = Progress::new(LevelRules {
            lines_per_level: 1,
            ..LevelRules::default()
        });
        // 4 lines at level 1: thresholds 1, 2, 3, 4 all pass.
        let outcome = p.record_clear(4);
        assert_eq!(outcome.level_ups, 4);
        assert_eq!(p.level(), 5);
        assert_eq!(p.drop_interval_ms(), 418);
    }
}
