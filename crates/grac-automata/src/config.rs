//! Engine configuration: size and alphabet bounds, score horizon.

use crate::error::ConfigError;
use crate::CellValue;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest ring that still has distinct left, middle and right neighbors.
pub const MIN_RING_SIZE: usize = 3;

/// Smallest alphabet accepted by [`EngineConfig::validate`].
pub const MIN_ALPHABET: CellValue = 2;

/// Largest alphabet accepted by [`EngineConfig::validate`].
///
/// Keeps the rule table at `16³ = 4096` entries and cell values inside `u8`.
pub const MAX_ALPHABET: CellValue = 16;

/// Fewest display lines: the current row plus two score rows.
pub const MIN_DISPLAY_LINES: usize = 3;

/// Bounds and defaults for an [`AutomatonEngine`](crate::AutomatonEngine).
///
/// The engine itself never clamps. These bounds are what the input driver
/// clamps against before calling the engine, and what the engine checks with
/// debug assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Smallest number of cells.
    pub min_size: usize,
    /// Largest number of cells.
    pub max_size: usize,
    /// Smallest alphabet size.
    pub min_num_val: CellValue,
    /// Largest alphabet size.
    pub max_num_val: CellValue,
    /// Number of cells on construction.
    pub default_size: usize,
    /// Alphabet size on construction.
    pub default_num_val: CellValue,
    /// Lines shown by the score view; the score holds `display_lines - 1` rows.
    pub display_lines: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_size: 3,
            max_size: 40,
            min_num_val: 2,
            max_num_val: 5,
            default_size: 8,
            default_num_val: 2,
            display_lines: 10,
        }
    }
}

impl EngineConfig {
    /// Sets the size bounds.
    pub fn with_size_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_size = min;
        self.max_size = max;
        self
    }

    /// Sets the alphabet bounds.
    pub fn with_alphabet_bounds(mut self, min: CellValue, max: CellValue) -> Self {
        self.min_num_val = min;
        self.max_num_val = max;
        self
    }

    /// Sets the size and alphabet used on construction.
    pub fn with_defaults(mut self, size: usize, num_val: CellValue) -> Self {
        self.default_size = size;
        self.default_num_val = num_val;
        self
    }

    /// Sets the number of display lines.
    pub fn with_display_lines(mut self, lines: usize) -> Self {
        self.display_lines = lines;
        self
    }

    /// Number of rows in the score buffer.
    pub fn horizon(&self) -> usize {
        self.display_lines.saturating_sub(1)
    }

    /// Checks that the bounds are consistent and usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_size < MIN_RING_SIZE || self.min_size > self.max_size {
            return Err(ConfigError::SizeBounds {
                min: self.min_size,
                max: self.max_size,
                floor: MIN_RING_SIZE,
            });
        }
        if self.min_num_val < MIN_ALPHABET
            || self.max_num_val > MAX_ALPHABET
            || self.min_num_val > self.max_num_val
        {
            return Err(ConfigError::AlphabetBounds {
                min: self.min_num_val,
                max: self.max_num_val,
                floor: MIN_ALPHABET,
                ceiling: MAX_ALPHABET,
            });
        }
        if !self.contains_size(self.default_size) {
            return Err(ConfigError::DefaultSize(self.default_size));
        }
        if !self.contains_alphabet(self.default_num_val) {
            return Err(ConfigError::DefaultAlphabet(self.default_num_val));
        }
        if self.display_lines < MIN_DISPLAY_LINES {
            return Err(ConfigError::DisplayLines {
                min: MIN_DISPLAY_LINES,
                got: self.display_lines,
            });
        }
        Ok(())
    }

    /// Returns true if `size` lies within the size bounds.
    pub fn contains_size(&self, size: usize) -> bool {
        (self.min_size..=self.max_size).contains(&size)
    }

    /// Returns true if `num_val` lies within the alphabet bounds.
    pub fn contains_alphabet(&self, num_val: CellValue) -> bool {
        (self.min_num_val..=self.max_num_val).contains(&num_val)
    }

    /// Clamps a requested size into the size bounds.
    pub fn clamp_size(&self, size: usize) -> usize {
        size.clamp(self.min_size, self.max_size)
    }

    /// Clamps a requested alphabet size into the alphabet bounds.
    pub fn clamp_alphabet(&self, num_val: CellValue) -> CellValue {
        num_val.clamp(self.min_num_val, self.max_num_val)
    }
}
