//! Sequencer error types.

use grac_automata::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a sequencer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequencerError {
    /// Engine configuration rejected.
    #[error("engine config: {0}")]
    Engine(#[from] ConfigError),

    /// A tempo table needs at least one frame per minute.
    #[error("frames per minute must be positive")]
    ZeroFramesPerMinute,

    /// Tempo index past the end of the tempo table.
    #[error("tempo index {index} out of range (table has {len} tempos)")]
    TempoOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of tempos in the table.
        len: usize,
    },

    /// At least one soundset is needed.
    #[error("soundset count must be positive")]
    NoSoundsets,
}
