//! Sound triggers derived from a grid snapshot.
//!
//! Value 0 is silence. A cell holding value `v > 0` plays sample `v - 1` of the
//! active soundset.

use grac_automata::CellValue;

/// One sound to start for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    /// Cell that produced the sound.
    pub cell: usize,
    /// Soundset to draw from.
    pub soundset: usize,
    /// Sample within the soundset.
    pub sample: usize,
}

/// Audio on/off switch and active soundset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundSelector {
    enabled: bool,
    soundset: usize,
    soundsets: usize,
}

impl SoundSelector {
    /// Creates a selector over `soundsets` banks, starting muted on bank 0.
    pub fn new(soundsets: usize) -> Self {
        Self {
            enabled: false,
            soundset: 0,
            soundsets,
        }
    }

    /// Returns true if sound is on.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the active soundset.
    pub fn soundset(&self) -> usize {
        self.soundset
    }

    /// Returns the number of soundsets.
    pub fn soundsets(&self) -> usize {
        self.soundsets
    }

    /// Steps through muted, soundset 0, soundset 1, and so on, back to muted.
    pub fn cycle(&mut self) {
        if !self.enabled {
            self.enabled = true;
            return;
        }
        self.soundset = (self.soundset + 1) % self.soundsets.max(1);
        if self.soundset == 0 {
            self.enabled = false;
        }
    }

    /// Turns sound on or off without changing the soundset.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// Triggers for every sounding cell of `grid`, in cell order.
///
/// Returns nothing while the selector is muted.
pub fn triggers(grid: &[CellValue], selector: &SoundSelector) -> Vec<Trigger> {
    if !selector.enabled {
        return Vec::new();
    }
    grid.iter()
        .enumerate()
        .filter(|(_, &value)| value != 0)
        .map(|(cell, &value)| Trigger {
            cell,
            soundset: selector.soundset,
            sample: value as usize - 1,
        })
        .collect()
}
