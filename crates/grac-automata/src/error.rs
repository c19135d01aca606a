//! Error types for grac-automata.

use thiserror::Error;

/// Errors raised when validating an [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Size bounds are inverted or below the smallest usable ring.
    #[error("invalid size bounds: {min}..={max} (minimum ring is {floor} cells)")]
    SizeBounds {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
        /// Smallest allowed minimum.
        floor: usize,
    },

    /// Alphabet bounds are inverted or outside the supported range.
    #[error("invalid alphabet bounds: {min}..={max} (supported {floor}..={ceiling})")]
    AlphabetBounds {
        /// Configured minimum.
        min: u8,
        /// Configured maximum.
        max: u8,
        /// Smallest supported alphabet.
        floor: u8,
        /// Largest supported alphabet.
        ceiling: u8,
    },

    /// Default size lies outside the size bounds.
    #[error("default size {0} is outside the size bounds")]
    DefaultSize(usize),

    /// Default alphabet lies outside the alphabet bounds.
    #[error("default alphabet size {0} is outside the alphabet bounds")]
    DefaultAlphabet(u8),

    /// Too few display lines to hold a score with a bottom row and its parent.
    #[error("display lines must be at least {min}, got {got}")]
    DisplayLines {
        /// Smallest accepted value.
        min: usize,
        /// Configured value.
        got: usize,
    },
}
