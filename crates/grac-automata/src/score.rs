//! Score buffer: a rolling window of upcoming generations.
//!
//! Row 0 holds the current generation and row `r` the generation `r` steps
//! ahead of it, which is what a piano-roll style view shows below the ring.

use crate::rule::RuleTable;
use crate::CellValue;

/// Fixed-height window of future generations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    /// One row per generation, oldest first. Every row has the same length.
    rows: Vec<Vec<CellValue>>,
}

impl Score {
    /// Creates a zeroed score with `horizon` rows of `width` cells.
    pub fn new(horizon: usize, width: usize) -> Self {
        Self {
            rows: vec![vec![0; width]; horizon],
        }
    }

    /// Returns the number of rows.
    pub fn horizon(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of cells per row.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Returns one row.
    pub fn row(&self, index: usize) -> Option<&[CellValue]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Returns the last row, the furthest generation ahead.
    pub fn last_row(&self) -> Option<&[CellValue]> {
        self.rows.last().map(Vec::as_slice)
    }

    /// Resizes every row to `width` cells and clears all values.
    pub fn resize(&mut self, width: usize) {
        for row in &mut self.rows {
            row.clear();
            row.resize(width, 0);
        }
    }

    /// Replaces every value outside the alphabet with 0.
    pub fn normalize(&mut self, num_val: CellValue) {
        for cell in self.rows.iter_mut().flatten() {
            if *cell >= num_val {
                *cell = 0;
            }
        }
    }

    /// Recomputes the whole window starting from `seed`.
    pub fn recompute(&mut self, seed: &[CellValue], rules: &RuleTable) {
        let Some((first, rest)) = self.rows.split_first_mut() else {
            return;
        };
        first.copy_from_slice(seed);
        let mut previous: &Vec<CellValue> = first;
        for row in rest {
            rules.step_ring(previous, row);
            previous = row;
        }
    }

    /// Scrolls the window by one generation.
    ///
    /// Rows move up by one and a new bottom row is derived from the row above it.
    pub fn advance(&mut self, rules: &RuleTable) {
        let horizon = self.rows.len();
        if horizon < 2 {
            if let Some(row) = self.rows.first_mut() {
                let current = row.clone();
                rules.step_ring(&current, row);
            }
            return;
        }
        self.rows.rotate_left(1);
        let (above, bottom) = self.rows.split_at_mut(horizon - 1);
        rules.step_ring(&above[horizon - 2], &mut bottom[0]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotate_left_rule() -> RuleTable {
        RuleTable::from_fn(2, |_, _, r| r)
    }

    #[test]
    fn test_new_score_shape() {
        let score = Score::new(4, 6);
        assert_eq!(score.horizon(), 4);
        assert_eq!(score.width(), 6);
        assert!(score.rows().iter().flatten().all(|&v| v == 0));
    }

    #[test]
    fn test_recompute_rows_follow_rule() {
        let mut score = Score::new(4, 4);
        score.recompute(&[1, 0, 0, 0], &rotate_left_rule());
        assert_eq!(score.row(0), Some(&[1, 0, 0, 0][..]));
        assert_eq!(score.row(1), Some(&[0, 0, 0, 1][..]));
        assert_eq!(score.row(2), Some(&[0, 0, 1, 0][..]));
        assert_eq!(score.row(3), Some(&[0, 1, 0, 0][..]));
        assert_eq!(score.row(4), None);
    }

    #[test]
    fn test_advance_matches_recompute() {
        let rules = RuleTable::from_fn(3, |l, m, r| (l + 2 * m + r) % 3);
        let seed = [1, 2, 0, 0, 1];

        let mut rolling = Score::new(5, seed.len());
        rolling.recompute(&seed, &rules);

        let mut state = seed.to_vec();
        let mut next = vec![0; seed.len()];
        for _ in 0..12 {
            rolling.advance(&rules);
            rules.step_ring(&state, &mut next);
            std::mem::swap(&mut state, &mut next);

            let mut fresh = Score::new(5, seed.len());
            fresh.recompute(&state, &rules);
            assert_eq!(rolling, fresh);
        }
    }

    #[test]
    fn test_last_row_is_furthest_ahead() {
        let rules = RuleTable::from_fn(3, |l, m, r| (l + m * r) % 3);
        let seed = [2, 0, 1, 1, 0, 2];
        let mut score = Score::new(4, seed.len());
        score.recompute(&seed, &rules);

        for k in 0..8 {
            // Seed stepped k + H - 1 times.
            let mut state = seed.to_vec();
            let mut next = vec![0; seed.len()];
            for _ in 0..k + score.horizon() - 1 {
                rules.step_ring(&state, &mut next);
                std::mem::swap(&mut state, &mut next);
            }
            assert_eq!(score.last_row(), Some(state.as_slice()));
            score.advance(&rules);
        }
        assert_eq!(Score::new(0, 3).last_row(), None);
    }

    #[test]
    fn test_resize_clears_values() {
        let mut score = Score::new(3, 4);
        score.recompute(&[1, 1, 0, 1], &rotate_left_rule());
        score.resize(6);
        assert_eq!(score.width(), 6);
        assert!(score.rows().iter().flatten().all(|&v| v == 0));
    }

    #[test]
    fn test_normalize() {
        let rules = RuleTable::from_fn(3, |_, m, _| m);
        let mut score = Score::new(2, 3);
        score.recompute(&[2, 1, 2], &rules);
        score.normalize(2);
        assert_eq!(score.row(0), Some(&[0, 1, 0][..]));
        assert_eq!(score.row(1), Some(&[0, 1, 0][..]));
    }
}
