//! Scoring module - points per line clear
//!
//! Base points come from [`LINE_SCORES`] and are multiplied by the level in
//! effect when the piece locked. Clears of more than four rows (possible on
//! tall boards with tall shapes) get no base points: the table is a ceiling.

use crate::types::LINE_SCORES;

/// Points for clearing `lines` rows at `level` (1-based).
///
/// # Examples
///
/// ```
/// use blockfall_core::line_score;
///
/// assert_eq!(line_score(1, 3), 300);
/// assert_eq!(line_score(4, 2), 1600);
/// assert_eq!(line_score(0, 9), 0);
/// assert_eq!(line_score(5, 1), 0);
/// ```
pub fn line_score(lines: u32, level: u32) -> u32 {
    let base = LINE_SCORES.get(lines as usize).copied().unwrap_or(0);
    base.saturating_mul(level)
}

/// Level for a cumulative line count: `lines / lines_per_level + 1`.
pub fn level_for_lines(lines: u32, lines_per_level: u32) -> u32 {
    lines / lines_per_level.max(1) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_score_table() {
        assert_eq!(line_score(1, 1), 100);
        assert_eq!(line_score(2, 1), 300);
        assert_eq!(line_score(3, 1), 500);
        assert_eq!(line_score(4, 1), 800);
    }

    #[test]
    fn test_line_score_level_multiplier() {
        assert_eq!(line_score(1, 3), 300);
        assert_eq!(line_score(4, 2), 1600);
        assert_eq!(line_score(2, 10), 3000);
    }

    #[test]
    fn test_line_score_outside_table() {
        assert_eq!(line_score(0, 1), 0);
        assert_eq!(line_score(0, 20), 0);
        assert_eq!(line_score(5, 4), 0);
        assert_eq!(line_score(12, 4), 0);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0, 5), 1);
        assert_eq!(level_for_lines(4, 5), 1);
        assert_eq!(level_for_lines(5, 5), 2);
        assert_eq!(level_for_lines(14, 5), 3);
        assert_eq!(level_for_lines(3, 0), 4);
    }
}
