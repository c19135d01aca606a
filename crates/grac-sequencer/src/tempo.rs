//! Tempo selection and frame-based transport.
//!
//! The host runs at a fixed frame rate. A tempo is a number of advances per
//! minute and is only offered if it divides the frames per minute, so every
//! advance lands on a whole frame.

use crate::error::SequencerError;

/// Frames per minute at 60 frames per second.
pub const FRAMES_PER_MINUTE: u32 = 3600;

/// Tempo index selected on startup (80 advances per minute at 3600 frames).
pub const DEFAULT_TEMPO_INDEX: usize = 25;

/// Sorted tempos that divide the frames per minute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempoTable {
    frames_per_minute: u32,
    tempos: Vec<u32>,
}

impl Default for TempoTable {
    fn default() -> Self {
        Self {
            frames_per_minute: FRAMES_PER_MINUTE,
            tempos: divisors(FRAMES_PER_MINUTE),
        }
    }
}

impl TempoTable {
    /// Builds the table of every divisor of `frames_per_minute`.
    pub fn new(frames_per_minute: u32) -> Result<Self, SequencerError> {
        if frames_per_minute == 0 {
            return Err(SequencerError::ZeroFramesPerMinute);
        }
        Ok(Self {
            frames_per_minute,
            tempos: divisors(frames_per_minute),
        })
    }

    /// Returns the frames per minute.
    pub fn frames_per_minute(&self) -> u32 {
        self.frames_per_minute
    }

    /// Returns all tempos, ascending.
    pub fn tempos(&self) -> &[u32] {
        &self.tempos
    }

    /// Returns the number of tempos.
    pub fn len(&self) -> usize {
        self.tempos.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.tempos.is_empty()
    }

    /// Returns the tempo at `index`.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.tempos.get(index).copied()
    }

    /// Returns the index of `tempo`, if it is in the table.
    pub fn position_of(&self, tempo: u32) -> Option<usize> {
        self.tempos.binary_search(&tempo).ok()
    }

    /// Frames between two advances at the tempo at `index`.
    pub fn ticks_per_advance(&self, index: usize) -> Option<u32> {
        self.get(index).map(|tempo| self.frames_per_minute / tempo)
    }
}

fn divisors(n: u32) -> Vec<u32> {
    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut d = 1u32;
    while u64::from(d) * u64::from(d) <= u64::from(n) {
        if n % d == 0 {
            low.push(d);
            if d != n / d {
                high.push(n / d);
            }
        }
        d += 1;
    }
    low.extend(high.into_iter().rev());
    low
}

/// Cursor over a [`TempoTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempoSelector {
    table: TempoTable,
    index: usize,
}

impl Default for TempoSelector {
    fn default() -> Self {
        Self {
            table: TempoTable::default(),
            index: DEFAULT_TEMPO_INDEX,
        }
    }
}

impl TempoSelector {
    /// Creates a selector at `index`.
    pub fn new(table: TempoTable, index: usize) -> Result<Self, SequencerError> {
        if index >= table.len() {
            return Err(SequencerError::TempoOutOfRange {
                index,
                len: table.len(),
            });
        }
        Ok(Self { table, index })
    }

    /// Returns the table.
    pub fn table(&self) -> &TempoTable {
        &self.table
    }

    /// Returns the selected index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the selected tempo.
    pub fn tempo(&self) -> u32 {
        self.table.tempos[self.index]
    }

    /// Frames between two advances at the selected tempo.
    pub fn ticks_per_advance(&self) -> u32 {
        self.table.frames_per_minute / self.tempo()
    }

    /// Selects the next faster tempo, if any.
    pub fn increase(&mut self) {
        if self.index + 1 < self.table.len() {
            self.index += 1;
        }
    }

    /// Selects the next slower tempo, if any.
    pub fn decrease(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Selects `index`.
    pub fn select(&mut self, index: usize) -> Result<(), SequencerError> {
        if index >= self.table.len() {
            return Err(SequencerError::TempoOutOfRange {
                index,
                len: self.table.len(),
            });
        }
        self.index = index;
        Ok(())
    }
}

/// Counts frames and reports when the automaton should advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transport {
    frame: u32,
    ticks_per_advance: u32,
}

impl Transport {
    /// Creates a transport firing every `ticks_per_advance` frames.
    pub fn new(ticks_per_advance: u32) -> Self {
        Self {
            frame: 0,
            ticks_per_advance,
        }
    }

    /// Counts one frame. Returns true, restarting the count, when an advance is due.
    pub fn tick(&mut self) -> bool {
        self.frame += 1;
        if self.ticks_per_advance <= self.frame {
            self.frame = 0;
            true
        } else {
            false
        }
    }

    /// Restarts the frame count.
    pub fn reset(&mut self) {
        self.frame = 0;
    }

    /// Changes the cadence without restarting the count.
    pub fn set_ticks_per_advance(&mut self, ticks: u32) {
        self.ticks_per_advance = ticks;
    }

    /// Returns the cadence.
    pub fn ticks_per_advance(&self) -> u32 {
        self.ticks_per_advance
    }

    /// Returns the frames counted since the last advance.
    pub fn frame(&self) -> u32 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = TempoTable::default();
        assert_eq!(table.len(), 45);
        assert_eq!(table.get(0), Some(1));
        assert_eq!(table.get(44), Some(3600));
        assert_eq!(table.get(DEFAULT_TEMPO_INDEX), Some(80));
        assert_eq!(table.ticks_per_advance(DEFAULT_TEMPO_INDEX), Some(45));
        assert!(table.tempos().windows(2).all(|w| w[0] < w[1]));
        assert!(table.tempos().iter().all(|t| 3600 % t == 0));
    }

    #[test]
    fn test_small_tables() {
        assert_eq!(TempoTable::new(1).unwrap().tempos(), &[1]);
        assert_eq!(TempoTable::new(12).unwrap().tempos(), &[1, 2, 3, 4, 6, 12]);
        assert_eq!(TempoTable::new(49).unwrap().tempos(), &[1, 7, 49]);
        assert_eq!(
            TempoTable::new(0),
            Err(SequencerError::ZeroFramesPerMinute)
        );
    }

    #[test]
    fn test_position_of() {
        let table = TempoTable::default();
        assert_eq!(table.position_of(80), Some(25));
        assert_eq!(table.position_of(7), None);
    }

    #[test]
    fn test_selector_clamps() {
        let table = TempoTable::new(12).unwrap();
        let mut selector = TempoSelector::new(table, 0).unwrap();
        selector.decrease();
        assert_eq!(selector.tempo(), 1);
        for _ in 0..10 {
            selector.increase();
        }
        assert_eq!(selector.tempo(), 12);
        assert_eq!(selector.ticks_per_advance(), 1);

        assert_eq!(
            selector.select(6),
            Err(SequencerError::TempoOutOfRange { index: 6, len: 6 })
        );
        assert_eq!(selector.index(), 5);
    }

    #[test]
    fn test_selector_rejects_bad_index() {
        assert!(TempoSelector::new(TempoTable::default(), 45).is_err());
    }

    #[test]
    fn test_transport_cadence() {
        let mut transport = Transport::new(3);
        let fired: Vec<bool> = (0..9).map(|_| transport.tick()).collect();
        assert_eq!(
            fired,
            [false, false, true, false, false, true, false, false, true]
        );
    }

    #[test]
    fn test_transport_every_frame() {
        let mut transport = Transport::new(1);
        assert!((0..5).all(|_| transport.tick()));
    }

    #[test]
    fn test_transport_reset_and_retime() {
        let mut transport = Transport::new(4);
        transport.tick();
        transport.tick();
        assert_eq!(transport.frame(), 2);
        transport.reset();
        assert_eq!(transport.frame(), 0);

        transport.tick();
        transport.tick();
        transport.set_ticks_per_advance(2);
        // Count already reached the new cadence.
        assert!(transport.tick());
    }
}
