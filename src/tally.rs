//! Key-press frequency tally.

use crate::layout::KeyId;
use std::collections::BTreeMap;

/// Count of append commits per key.
///
/// Only append commits are counted; Backspace commits and double-tap
/// deletes never increment the tally. BTreeMap gives stable iteration
/// order for display.
#[derive(Debug, Default, Clone)]
pub struct PressTally {
    counts: BTreeMap<KeyId, u32>,
}

impl PressTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one append commit for a key
    pub fn record(&mut self, key: KeyId) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Count recorded for a key (zero if never pressed)
    #[must_use]
    pub fn count(&self, key: KeyId) -> u32 {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Keys and counts in stable (sorted) order
    pub fn iter(&self) -> impl Iterator<Item = (KeyId, u32)> + '_ {
        self.counts.iter().map(|(&k, &c)| (k, c))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of recorded presses
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Largest single-key count, for chart scaling
    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0)
    }
}
