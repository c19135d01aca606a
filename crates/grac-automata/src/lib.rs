//! One-dimensional ring cellular automaton for rhythm generation.
//!
//! Each cell holds one of `num_val` values. A rule table maps every
//! neighborhood `(left, mid, right)` on the ring to the next value of the middle
//! cell. The engine keeps the previous, current and next generations plus a
//! score: a window of upcoming generations used to preview what will play.
//!
//! # Example
//!
//! ```
//! use grac_automata::{AutomatonEngine, EngineConfig, RuleTable};
//!
//! let mut engine = AutomatonEngine::new(EngineConfig::default()).unwrap();
//! engine.set_grid_size(16, true);
//! engine.set_alphabet_size(3, true);
//!
//! let rules = RuleTable::from_fn(3, |left, mid, right| (left + mid + right) % 3);
//! for (i, &value) in rules.entries().iter().enumerate() {
//!     engine.set_rule(i, value);
//! }
//! engine.set_initial_cell(8, 1);
//!
//! engine.initialize();
//! for _ in 0..4 {
//!     engine.advance();
//! }
//! assert_eq!(engine.generation(), 4);
//! assert_eq!(engine.score().row(0), Some(engine.grid()));
//! ```

mod config;
mod engine;
mod error;
pub mod rule;
mod score;

pub use config::{EngineConfig, MAX_ALPHABET, MIN_ALPHABET, MIN_DISPLAY_LINES, MIN_RING_SIZE};
pub use engine::AutomatonEngine;
pub use error::ConfigError;
pub use rule::{rule_index, rule_neighbors, RuleTable};
pub use score::Score;

/// Value held by one cell, always below the engine's alphabet size.
pub type CellValue = u8;
