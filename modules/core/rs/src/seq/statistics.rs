use ahash::HashMap;

use crate::alphabet::{Alphabet, SequenceItem};

/// Per-symbol occurrence counts of a sequence
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceStatistics {
    alphabet: &'static Alphabet,
    counts: HashMap<u8, usize>,
    total: usize,
}

impl SequenceStatistics {
    pub fn new<'a>(
        alphabet: &'static Alphabet,
        items: impl IntoIterator<Item = &'a SequenceItem>,
    ) -> Self {
        let mut counts = HashMap::default();
        let mut total = 0;
        for item in items {
            *counts.entry(item.byte()).or_default() += 1;
            total += 1;
        }
        Self {
            alphabet,
            counts,
            total,
        }
    }

    pub fn alphabet(&self) -> &'static Alphabet {
        self.alphabet
    }

    /// Number of counted items
    pub fn total(&self) -> usize {
        self.total
    }

    /// Occurrences of `symbol` (case-insensitive)
    pub fn count(&self, symbol: char) -> usize {
        self.alphabet
            .lookup(symbol)
            .and_then(|x| self.counts.get(&x.byte()))
            .copied()
            .unwrap_or(0)
    }

    pub fn fraction(&self, symbol: char) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count(symbol) as f64 / self.total as f64
        }
    }

    /// Counts for every alphabet item that occurs at least once, in alphabet order
    pub fn counts(&self) -> Vec<(&'static SequenceItem, usize)> {
        self.alphabet
            .items()
            .iter()
            .filter_map(|x| self.counts.get(&x.byte()).map(|cnt| (x, *cnt)))
            .collect()
    }
}
