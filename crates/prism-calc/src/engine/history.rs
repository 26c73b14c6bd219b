//! Calculation history: an append-only log of completed operations.

use serde::{Deserialize, Serialize};

use super::op::Op;
use super::stringify;

/// One completed binary calculation.
///
/// Entries are immutable once recorded; truncation to the most recent
/// few is a display concern, not a storage one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Left-hand operand.
    pub lhs: f64,
    /// The operator that was applied.
    pub op: Op,
    /// Right-hand operand.
    pub rhs: f64,
    /// The computed result.
    pub result: f64,
}

impl HistoryEntry {
    /// Creates a new entry.
    #[must_use]
    pub const fn new(lhs: f64, op: Op, rhs: f64, result: f64) -> Self {
        Self {
            lhs,
            op,
            rhs,
            result,
        }
    }

    /// Returns the entry as a display line, e.g. `2 + 3 = 5`.
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{} {} {} = {}",
            stringify(self.lhs),
            self.op.symbol(),
            stringify(self.rhs),
            stringify(self.result)
        )
    }
}

/// Ordered log of completed calculations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Records a completed calculation.
    pub fn record(&mut self, lhs: f64, op: Op, rhs: f64, result: f64) {
        self.push(HistoryEntry::new(lhs, op, rhs, result));
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no calculation has completed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Iterates newest first.
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Returns the entry at `index` (0 = oldest).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Returns the last `n` entries, newest first.
    #[must_use]
    pub fn last_n(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    /// Serializes the log to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Rebuilds a log from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }
}
