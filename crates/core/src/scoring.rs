//! Scoring module - line clears, hard drops, levels and gravity
//!
//! Classic rules: 1/2/3/4-line clears are worth 100/300/500/800 points times
//! the current level, hard drops earn 2 points per row times the level, and
//! the level is `lines / 10 + 1`.

use crate::types::{
    BASE_DROP_SECS, DROP_SECS_PER_LEVEL, HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL, LINE_SCORES,
    MIN_DROP_SECS,
};

/// Points for clearing `lines` rows in one lock at `level`.
///
/// More than 4 rows score as 4.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    LINE_SCORES[lines.min(4)].saturating_mul(level)
}

/// Bonus for a hard drop of `distance` rows at `level`.
pub fn hard_drop_score(distance: u32, level: u32) -> u32 {
    distance
        .saturating_mul(HARD_DROP_POINTS_PER_ROW)
        .saturating_mul(level)
}

/// Level reached after clearing `total_lines` lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval in seconds for `level` (1-based).
pub fn drop_interval_secs(level: u32) -> f64 {
    let steps = level.saturating_sub(1) as f64;
    (BASE_DROP_SECS - steps * DROP_SECS_PER_LEVEL).max(MIN_DROP_SECS)
}
