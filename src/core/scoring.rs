//! Scoring module
//!
//! Points are awarded once per lock event, from the count of rows
//! cleared by that lock. The table is intentionally flat (no level
//! multiplier, no combo): 1 -> 10, 2 -> 25, 3 -> 35, 4 -> 50.

use crate::types::LINE_SCORES;

/// Points for a single lock event that cleared `rows` rows.
///
/// Any count outside 1..=4 (including 0) awards nothing.
pub fn line_points(rows: usize) -> u32 {
    if rows < LINE_SCORES.len() {
        LINE_SCORES[rows]
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_values() {
        assert_eq!(line_points(1), 10);
        assert_eq!(line_points(2), 25);
        assert_eq!(line_points(3), 35);
        assert_eq!(line_points(4), 50);
    }

    #[test]
    fn zero_and_out_of_range_award_nothing() {
        assert_eq!(line_points(0), 0);
        assert_eq!(line_points(5), 0);
        assert_eq!(line_points(100), 0);
    }
}
