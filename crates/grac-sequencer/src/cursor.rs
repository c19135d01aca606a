//! Editing cursors and bounded parameter steps.
//!
//! Cursors belong to whoever edits the automaton. They read lengths from the
//! engine and hand back an index for the engine's setters.

use grac_automata::{CellValue, EngineConfig};

/// Rules shown per row when the rule table is laid out as a grid.
pub const RULES_PER_ROW: usize = 8;

/// Direction of a one-unit parameter change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One more.
    Up,
    /// One less.
    Down,
}

/// Applies `step` to a grid size, staying within the config's size bounds.
pub fn step_size(config: &EngineConfig, size: usize, step: Step) -> usize {
    let size = match step {
        Step::Up => size.saturating_add(1),
        Step::Down => size.saturating_sub(1),
    };
    config.clamp_size(size)
}

/// Applies `step` to an alphabet size, staying within the config's alphabet bounds.
pub fn step_alphabet(config: &EngineConfig, num_val: CellValue, step: Step) -> CellValue {
    let num_val = match step {
        Step::Up => num_val.saturating_add(1),
        Step::Down => num_val.saturating_sub(1),
    };
    config.clamp_alphabet(num_val)
}

/// Selected entry of a rule table displayed in rows of [`RULES_PER_ROW`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleCursor {
    index: usize,
}

impl RuleCursor {
    /// Returns the selected flat rule index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the selected `(row, column)`.
    pub fn position(&self) -> (usize, usize) {
        (self.index / RULES_PER_ROW, self.index % RULES_PER_ROW)
    }

    /// Returns to the first rule.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Moves one column left, stopping at the start of the row.
    pub fn left(&mut self) {
        if self.index % RULES_PER_ROW > 0 {
            self.index -= 1;
        }
    }

    /// Moves one column right, stopping at the end of the row or of the table.
    pub fn right(&mut self, len: usize) {
        if self.index % RULES_PER_ROW < RULES_PER_ROW - 1 && self.index + 1 < len {
            self.index += 1;
        }
    }

    /// Moves one row up, if there is one.
    pub fn up(&mut self) {
        if self.index >= RULES_PER_ROW {
            self.index -= RULES_PER_ROW;
        }
    }

    /// Moves one row down, if the table reaches that far.
    pub fn down(&mut self, len: usize) {
        if self.index + RULES_PER_ROW < len {
            self.index += RULES_PER_ROW;
        }
    }
}

/// Selected cell on the ring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellCursor {
    index: usize,
}

impl CellCursor {
    /// Returns the selected cell index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns to the first cell.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Moves to the previous cell, wrapping around the ring.
    pub fn left(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index % len + len - 1) % len;
        }
    }

    /// Moves to the next cell, wrapping around the ring.
    pub fn right(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }
}
