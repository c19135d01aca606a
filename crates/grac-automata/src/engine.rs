//! The automaton engine: grid buffers, rule table and score.

use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::rule::RuleTable;
use crate::score::Score;
use crate::CellValue;

/// One-dimensional ring automaton with a variable alphabet.
///
/// The engine owns every buffer. Callers configure it through the setters,
/// then call [`initialize`](Self::initialize) once and
/// [`advance`](Self::advance) once per tick, reading snapshots in between.
///
/// # Example
///
/// ```
/// use grac_automata::AutomatonEngine;
///
/// let mut engine = AutomatonEngine::default();
/// engine.set_grid_size(4, true);
/// engine.set_alphabet_size(2, true);
/// // next = left xor mid
/// for (i, v) in [0, 0, 1, 1, 1, 1, 0, 0].into_iter().enumerate() {
///     engine.set_rule(i, v);
/// }
/// engine.set_initial_cell(0, 1);
///
/// engine.initialize();
/// assert_eq!(engine.next_grid(), &[1, 1, 0, 0]);
///
/// engine.advance();
/// assert_eq!(engine.grid(), &[1, 1, 0, 0]);
/// assert_eq!(engine.generation(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct AutomatonEngine {
    config: EngineConfig,
    /// Seed applied by `initialize`.
    initial_grid: Vec<CellValue>,
    /// Generation before the current one.
    last_grid: Vec<CellValue>,
    /// Current generation.
    grid: Vec<CellValue>,
    /// Generation after the current one.
    next_grid: Vec<CellValue>,
    score: Score,
    rules: RuleTable,
    /// Table the current run of non-fresh alphabet changes migrates from.
    migration_source: Option<RuleTable>,
    generation: u64,
}

impl Default for AutomatonEngine {
    fn default() -> Self {
        Self::with_valid_config(EngineConfig::default())
    }
}

impl AutomatonEngine {
    /// Creates an engine at the config's default size and alphabet.
    ///
    /// All buffers start at 0 and every rule maps to 0.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: EngineConfig) -> Self {
        let size = config.default_size;
        Self {
            config,
            initial_grid: vec![0; size],
            last_grid: vec![0; size],
            grid: vec![0; size],
            next_grid: vec![0; size],
            score: Score::new(config.horizon(), size),
            rules: RuleTable::new(config.default_num_val),
            migration_source: None,
            generation: 0,
        }
    }

    // ------------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------------

    /// Resizes the grid buffers to `size` cells.
    ///
    /// With `fresh`, or when the size actually changes, every grid-shaped buffer
    /// is reset: the seed is cleared (fresh) or truncated/zero-extended (not
    /// fresh), the current grid is re-seeded, and the last grid, next grid and
    /// score are zeroed. A non-fresh call with the current size changes nothing.
    ///
    /// `size` must lie within the configured bounds; the engine does not clamp.
    pub fn set_grid_size(&mut self, size: usize, fresh: bool) {
        debug_assert!(
            self.config.contains_size(size),
            "grid size {size} outside {}..={}",
            self.config.min_size,
            self.config.max_size
        );
        if !fresh && size == self.initial_grid.len() {
            return;
        }
        tracing::debug!(from = self.initial_grid.len(), to = size, fresh, "resizing grid");

        if fresh {
            self.initial_grid.clear();
        }
        self.initial_grid.resize(size, 0);
        self.grid.clone_from(&self.initial_grid);
        self.last_grid.clear();
        self.last_grid.resize(size, 0);
        self.next_grid.clear();
        self.next_grid.resize(size, 0);
        self.score.resize(size);
    }

    /// Changes the alphabet size and resizes the rule table to `num_val³` entries.
    ///
    /// With `fresh`, every rule is reset to 0 and the migration source is dropped.
    /// Otherwise, if the table length changes, rules are migrated from the table
    /// that was current before the first non-fresh change since the last fresh
    /// reset; see [`RuleTable::migrated`]. Cell values that no longer fit the
    /// alphabet are reset to 0 in every buffer.
    ///
    /// `num_val` must lie within the configured bounds; the engine does not clamp.
    pub fn set_alphabet_size(&mut self, num_val: CellValue, fresh: bool) {
        debug_assert!(
            self.config.contains_alphabet(num_val),
            "alphabet size {num_val} outside {}..={}",
            self.config.min_num_val,
            self.config.max_num_val
        );
        if fresh {
            tracing::debug!(num_val, "resetting rule table");
            self.migration_source = None;
            self.rules = RuleTable::new(num_val);
        } else if num_val != self.rules.num_val() {
            let source = self
                .migration_source
                .get_or_insert_with(|| self.rules.clone());
            tracing::debug!(
                source = source.num_val(),
                to = num_val,
                "migrating rule table"
            );
            self.rules = RuleTable::migrated(source, num_val);
        } else {
            return;
        }
        self.normalize_cells();
    }

    /// Sets the result of one rule, by flat index.
    ///
    /// Writes with an index past the table or a value outside the alphabet are ignored.
    pub fn set_rule(&mut self, index: usize, value: CellValue) {
        if !self.rules.set(index, value) {
            tracing::warn!(
                index,
                value,
                len = self.rules.len(),
                num_val = self.num_val(),
                "ignored out-of-range rule write"
            );
        }
    }

    /// Advances one rule to its next value, wrapping to 0.
    pub fn cycle_rule(&mut self, index: usize) -> Option<CellValue> {
        let value = self.rules.cycle(index);
        if value.is_none() {
            tracing::warn!(index, len = self.rules.len(), "ignored out-of-range rule cycle");
        }
        value
    }

    /// Sets one cell of the seed.
    ///
    /// Writes with an index past the grid or a value outside the alphabet are ignored.
    pub fn set_initial_cell(&mut self, index: usize, value: CellValue) {
        let num_val = self.num_val();
        match self.initial_grid.get_mut(index) {
            Some(cell) if value < num_val => *cell = value,
            _ => tracing::warn!(
                index,
                value,
                size = self.initial_grid.len(),
                num_val,
                "ignored out-of-range seed write"
            ),
        }
    }

    /// Advances one seed cell to its next value, wrapping to 0.
    pub fn cycle_initial_cell(&mut self, index: usize) -> Option<CellValue> {
        let num_val = self.num_val();
        match self.initial_grid.get_mut(index) {
            Some(cell) => {
                *cell = (*cell + 1) % num_val;
                Some(*cell)
            }
            None => {
                tracing::warn!(
                    index,
                    size = self.initial_grid.len(),
                    "ignored out-of-range seed cycle"
                );
                None
            }
        }
    }

    // ------------------------------------------------------------------------
    // Evolution
    // ------------------------------------------------------------------------

    /// Restarts from the seed.
    ///
    /// Resets the generation counter, copies the seed into the current grid,
    /// computes the next grid and rebuilds the score.
    pub fn initialize(&mut self) {
        self.generation = 0;
        let num_val = self.num_val();
        for cell in &mut self.initial_grid {
            if *cell >= num_val {
                *cell = 0;
            }
        }
        self.grid.copy_from_slice(&self.initial_grid);
        self.rules.step_ring(&self.grid, &mut self.next_grid);
        self.score.recompute(&self.initial_grid, &self.rules);
        tracing::debug!(size = self.size(), num_val, "automaton initialized");
    }

    /// Moves forward one generation.
    pub fn advance(&mut self) {
        self.generation += 1;
        // last <- grid <- next, then refill next from the new grid.
        std::mem::swap(&mut self.last_grid, &mut self.grid);
        std::mem::swap(&mut self.grid, &mut self.next_grid);
        self.rules.step_ring(&self.grid, &mut self.next_grid);
        self.score.advance(&self.rules);
        tracing::trace!(generation = self.generation, "advanced");
    }

    fn normalize_cells(&mut self) {
        let num_val = self.num_val();
        let buffers = [
            &mut self.initial_grid,
            &mut self.grid,
            &mut self.last_grid,
            &mut self.next_grid,
        ];
        for cell in buffers.into_iter().flatten() {
            if *cell >= num_val {
                *cell = 0;
            }
        }
        self.score.normalize(num_val);
    }

    // ------------------------------------------------------------------------
    // Snapshots
    // ------------------------------------------------------------------------

    /// Returns the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the number of cells.
    pub fn size(&self) -> usize {
        self.initial_grid.len()
    }

    /// Returns the alphabet size.
    pub fn num_val(&self) -> CellValue {
        self.rules.num_val()
    }

    /// Returns the number of advances since the last `initialize`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the seed.
    pub fn initial_grid(&self) -> &[CellValue] {
        &self.initial_grid
    }

    /// Returns the current generation.
    pub fn grid(&self) -> &[CellValue] {
        &self.grid
    }

    /// Returns the previous generation.
    pub fn last_grid(&self) -> &[CellValue] {
        &self.last_grid
    }

    /// Returns the upcoming generation.
    pub fn next_grid(&self) -> &[CellValue] {
        &self.next_grid
    }

    /// Returns the score buffer.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Returns the rule table.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Returns one rule result, by flat index.
    pub fn rule(&self, index: usize) -> Option<CellValue> {
        self.rules.get(index)
    }

    /// Returns true if a migration source is held.
    pub fn is_migrating(&self) -> bool {
        self.migration_source.is_some()
    }
}
