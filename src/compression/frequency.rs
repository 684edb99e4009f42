use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::types::Symbol;

/// Occurrence count of every distinct symbol in one buffer.
///
/// Backed by a `BTreeMap` so iteration is always in ascending symbol order,
/// which the tree builder relies on for its tie-break.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: BTreeMap<Symbol, usize>,
}

impl FrequencyTable {
    /// Count every symbol of `text`
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let counts = text.chars().fold(BTreeMap::new(), |mut acc, c| {
            *acc.entry(c).or_insert(0) += 1;
            acc
        });
        Self { counts }
    }

    /// Number of distinct symbols
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[must_use]
    pub fn get(&self, symbol: Symbol) -> Option<usize> {
        self.counts.get(&symbol).copied()
    }

    /// Sum of all counts (the symbol length of the source buffer)
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(symbol, count)` pairs in ascending symbol order
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, usize)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }
}

/// Count the occurrences of each distinct symbol in `text`.
#[must_use]
pub fn build_frequency_table(text: &str) -> FrequencyTable {
    FrequencyTable::from_text(text)
}
