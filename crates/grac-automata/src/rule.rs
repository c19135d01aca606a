//! Rule tables and the ring transition.
//!
//! A rule table maps every neighborhood `(left, mid, right)` to the next
//! value of the middle cell. Entries are stored flat, indexed by
//! `left * n² + mid * n + right` where `n` is the alphabet size.

use crate::CellValue;

/// Flat index of the neighborhood `(left, mid, right)` for an alphabet of `num_val`.
#[inline]
pub fn rule_index(left: CellValue, mid: CellValue, right: CellValue, num_val: CellValue) -> usize {
    debug_assert!(
        left < num_val && mid < num_val && right < num_val,
        "neighborhood ({left}, {mid}, {right}) outside alphabet {num_val}"
    );
    let n = num_val as usize;
    (left as usize * n + mid as usize) * n + right as usize
}

/// Decodes a flat index back into its neighborhood `(left, mid, right)`.
#[inline]
pub fn rule_neighbors(index: usize, num_val: CellValue) -> (CellValue, CellValue, CellValue) {
    let n = num_val as usize;
    (
        (index / (n * n)) as CellValue,
        ((index / n) % n) as CellValue,
        (index % n) as CellValue,
    )
}

/// Integer cube root of a table length, if the length is a perfect cube.
pub fn alphabet_for_len(len: usize) -> Option<CellValue> {
    (1..=CellValue::MAX as usize)
        .take_while(|n| n * n * n <= len)
        .find(|n| n * n * n == len)
        .map(|n| n as CellValue)
}

/// Transition function over an alphabet of `num_val` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    /// Alphabet size.
    num_val: CellValue,
    /// Result for each neighborhood, `num_val³` entries.
    entries: Vec<CellValue>,
}

impl RuleTable {
    /// Creates a table where every neighborhood maps to 0.
    pub fn new(num_val: CellValue) -> Self {
        let n = num_val as usize;
        Self {
            num_val,
            entries: vec![0; n * n * n],
        }
    }

    /// Builds a table from flat entries, inferring the alphabet from the length.
    ///
    /// Returns `None` if the length is not a cube or an entry is outside the alphabet.
    pub fn from_entries(entries: Vec<CellValue>) -> Option<Self> {
        let num_val = alphabet_for_len(entries.len())?;
        if entries.iter().any(|&v| v >= num_val) {
            return None;
        }
        Some(Self { num_val, entries })
    }

    /// Builds a table by evaluating `f` on every neighborhood.
    ///
    /// Results are reduced modulo the alphabet size.
    pub fn from_fn<F>(num_val: CellValue, mut f: F) -> Self
    where
        F: FnMut(CellValue, CellValue, CellValue) -> CellValue,
    {
        let mut table = Self::new(num_val);
        for (i, entry) in table.entries.iter_mut().enumerate() {
            let (left, mid, right) = rule_neighbors(i, num_val);
            *entry = f(left, mid, right) % num_val;
        }
        table
    }

    /// Rebuilds `source` for a new alphabet size.
    ///
    /// Neighborhoods expressible in both alphabets keep their result, unless that
    /// result no longer fits the new alphabet, in which case it becomes 0. All
    /// other neighborhoods map to 0.
    pub fn migrated(source: &RuleTable, num_val: CellValue) -> Self {
        let old = source.num_val;
        let mut clamped = 0usize;
        let mut table = Self::new(num_val);
        for (i, entry) in table.entries.iter_mut().enumerate() {
            let (left, mid, right) = rule_neighbors(i, num_val);
            if left < old && mid < old && right < old {
                let value = source.apply(left, mid, right);
                if value < num_val {
                    *entry = value;
                } else {
                    clamped += 1;
                }
            }
        }
        if clamped > 0 {
            tracing::debug!(
                from = old,
                to = num_val,
                clamped,
                "rule targets outside the new alphabet reset to 0"
            );
        }
        table
    }

    /// Returns the alphabet size.
    pub fn num_val(&self) -> CellValue {
        self.num_val
    }

    /// Returns the number of entries (`num_val³`).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the flat entries.
    pub fn entries(&self) -> &[CellValue] {
        &self.entries
    }

    /// Gets the entry at a flat index.
    pub fn get(&self, index: usize) -> Option<CellValue> {
        self.entries.get(index).copied()
    }

    /// Sets the entry at a flat index.
    ///
    /// Returns false, leaving the table unchanged, if the index or value is out of range.
    pub fn set(&mut self, index: usize, value: CellValue) -> bool {
        if value >= self.num_val {
            return false;
        }
        match self.entries.get_mut(index) {
            Some(entry) => {
                *entry = value;
                true
            }
            None => false,
        }
    }

    /// Advances the entry at a flat index to the next value, wrapping to 0.
    pub fn cycle(&mut self, index: usize) -> Option<CellValue> {
        let num_val = self.num_val;
        let entry = self.entries.get_mut(index)?;
        *entry = (*entry + 1) % num_val;
        Some(*entry)
    }

    /// Looks up the next value of `mid` given its neighbors.
    #[inline]
    pub fn apply(&self, left: CellValue, mid: CellValue, right: CellValue) -> CellValue {
        self.entries[rule_index(left, mid, right, self.num_val)]
    }

    /// Computes one generation of a ring.
    ///
    /// `next[i]` receives the rule applied to `current[i - 1]`, `current[i]` and
    /// `current[i + 1]`, with indices taken modulo the ring length. This is the
    /// only transition used by the engine, for the grid and for every score row.
    pub fn step_ring(&self, current: &[CellValue], next: &mut [CellValue]) {
        debug_assert_eq!(current.len(), next.len());
        let len = current.len();
        for (i, out) in next.iter_mut().enumerate() {
            let left = current[(i + len - 1) % len];
            let right = current[(i + 1) % len];
            *out = self.apply(left, current[i], right);
        }
    }
}
