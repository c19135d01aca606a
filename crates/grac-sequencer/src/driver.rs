//! Frame-driven sequencer around an [`AutomatonEngine`].

use grac_automata::{AutomatonEngine, EngineConfig};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SequencerError;
use crate::tempo::{TempoSelector, TempoTable, Transport, DEFAULT_TEMPO_INDEX, FRAMES_PER_MINUTE};
use crate::voice::{triggers, SoundSelector, Trigger};

/// Soundsets shipped with the default configuration.
pub const DEFAULT_SOUNDSETS: usize = 2;

/// Configuration for a [`Sequencer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SequencerConfig {
    /// Bounds and defaults of the automaton.
    pub engine: EngineConfig,
    /// Host frames per minute; tempos are its divisors.
    pub frames_per_minute: u32,
    /// Tempo table index selected on construction.
    pub tempo_index: usize,
    /// Number of soundsets the audio player offers.
    pub soundsets: usize,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            frames_per_minute: FRAMES_PER_MINUTE,
            tempo_index: DEFAULT_TEMPO_INDEX,
            soundsets: DEFAULT_SOUNDSETS,
        }
    }
}

/// Runs an automaton at a tempo and reports what should sound.
///
/// The host calls [`tick`](Self::tick) once per frame. Configuration goes
/// through [`engine_mut`](Self::engine_mut) between runs, followed by
/// [`start`](Self::start).
#[derive(Debug, Clone)]
pub struct Sequencer {
    engine: AutomatonEngine,
    tempo: TempoSelector,
    transport: Transport,
    sound: SoundSelector,
}

impl Default for Sequencer {
    fn default() -> Self {
        let tempo = TempoSelector::default();
        Self {
            engine: AutomatonEngine::default(),
            transport: Transport::new(tempo.ticks_per_advance()),
            tempo,
            sound: SoundSelector::new(DEFAULT_SOUNDSETS),
        }
    }
}

impl Sequencer {
    /// Builds a sequencer from a configuration.
    pub fn new(config: SequencerConfig) -> Result<Self, SequencerError> {
        if config.soundsets == 0 {
            return Err(SequencerError::NoSoundsets);
        }
        let engine = AutomatonEngine::new(config.engine)?;
        let table = TempoTable::new(config.frames_per_minute)?;
        let tempo = TempoSelector::new(table, config.tempo_index)?;
        Ok(Self {
            engine,
            transport: Transport::new(tempo.ticks_per_advance()),
            tempo,
            sound: SoundSelector::new(config.soundsets),
        })
    }

    /// Returns the automaton.
    pub fn engine(&self) -> &AutomatonEngine {
        &self.engine
    }

    /// Returns the automaton for configuration.
    pub fn engine_mut(&mut self) -> &mut AutomatonEngine {
        &mut self.engine
    }

    /// Returns the tempo selection.
    pub fn tempo(&self) -> &TempoSelector {
        &self.tempo
    }

    /// Returns the transport.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Returns the sound selection.
    pub fn sound(&self) -> &SoundSelector {
        &self.sound
    }

    /// Returns the sound selection for toggling.
    pub fn sound_mut(&mut self) -> &mut SoundSelector {
        &mut self.sound
    }

    /// Selects a tempo by table index and retimes the transport.
    pub fn set_tempo_index(&mut self, index: usize) -> Result<(), SequencerError> {
        self.tempo.select(index)?;
        self.retime();
        Ok(())
    }

    /// Selects the next faster tempo.
    pub fn faster(&mut self) {
        self.tempo.increase();
        self.retime();
    }

    /// Selects the next slower tempo.
    pub fn slower(&mut self) {
        self.tempo.decrease();
        self.retime();
    }

    fn retime(&mut self) {
        let ticks = self.tempo.ticks_per_advance();
        tracing::debug!(tempo = self.tempo.tempo(), ticks, "tempo changed");
        self.transport.set_ticks_per_advance(ticks);
    }

    /// Restarts the automaton from its seed.
    ///
    /// Returns the triggers for generation 0.
    pub fn start(&mut self) -> Vec<Trigger> {
        self.engine.initialize();
        self.transport.reset();
        tracing::info!(
            size = self.engine.size(),
            num_val = self.engine.num_val(),
            tempo = self.tempo.tempo(),
            "sequencer started"
        );
        self.current_triggers()
    }

    /// Counts one frame.
    ///
    /// Returns the triggers of the new generation when the automaton advanced,
    /// `None` otherwise.
    pub fn tick(&mut self) -> Option<Vec<Trigger>> {
        if !self.transport.tick() {
            return None;
        }
        self.engine.advance();
        Some(self.current_triggers())
    }

    /// Triggers for the current generation.
    pub fn current_triggers(&self) -> Vec<Trigger> {
        triggers(self.engine.grid(), &self.sound)
    }
}
