//! Frequency aggregation.

use std::collections::BTreeMap;

use crate::classify::Classifier;
use crate::locale::Locale;
use crate::tokenize::Tokens;

/// Occurrence counts keyed by folded word.
///
/// Backed by a key-ordered map so that iteration is word-ascending; the
/// ranking stage relies on that for its tie-break.
#[derive(Debug, Default)]
pub struct WordCounts {
    counts: BTreeMap<String, u64>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence. Words of a single character (measured in
    /// code points, not bytes) are dropped here, silently; this is the one
    /// place the length filter lives.
    pub fn record(&mut self, word: String) {
        if word.chars().nth(1).is_none() {
            return;
        }
        *self.counts.entry(word).or_insert(0) += 1;
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }
}

/// Entries in ascending word order.
impl IntoIterator for WordCounts {
    type Item = (String, u64);
    type IntoIter = std::collections::btree_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

/// Runs the whole counting pipeline over decoded text: tokenize, fold,
/// record. The input is consumed in full before the caller sees any result.
pub fn aggregate(text: &str, classifier: &Classifier, locale: &Locale) -> WordCounts {
    let mut counts = WordCounts::new();
    for token in Tokens::new(text, classifier) {
        counts.record(locale.fold(token));
    }
    counts
}
