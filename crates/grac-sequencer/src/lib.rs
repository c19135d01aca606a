//! Driving a grac automaton as a rhythm sequencer.
//!
//! The host owns the window, input and audio. This crate holds the logic it
//! needs around [`grac_automata::AutomatonEngine`]:
//! - `tempo` - tempos that divide the frame rate, and a frame counter
//! - `cursor` - rule and cell selection, bounded size/alphabet steps
//! - `voice` - which sample each sounding cell triggers
//! - `driver` - a [`Sequencer`] tying the above to an engine
//!
//! # Example
//!
//! ```
//! use grac_sequencer::{cursor::CellCursor, Sequencer};
//!
//! let mut sequencer = Sequencer::default();
//! sequencer.sound_mut().cycle();
//!
//! let engine = sequencer.engine_mut();
//! engine.set_grid_size(12, true);
//! engine.set_alphabet_size(2, true);
//! engine.set_rule(0b010, 1);
//!
//! let mut cursor = CellCursor::default();
//! cursor.right(engine.size());
//! engine.cycle_initial_cell(cursor.index());
//!
//! let triggers = sequencer.start();
//! assert_eq!(triggers.len(), 1);
//! assert_eq!(triggers[0].cell, 1);
//!
//! let fired = (0..45).filter_map(|_| sequencer.tick()).count();
//! assert_eq!(fired, 1);
//! ```

pub mod cursor;
mod driver;
mod error;
pub mod tempo;
pub mod voice;

pub use driver::{Sequencer, SequencerConfig, DEFAULT_SOUNDSETS};
pub use error::SequencerError;
pub use voice::{SoundSelector, Trigger};
