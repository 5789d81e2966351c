//! Ranking of word counts into report order.

use crate::count::WordCounts;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub count: u64,
    pub word: String,
}

/// Orders entries by count descending, tie-broken by word ascending.
///
/// The tie-break is a contract of the report format, not an accident of
/// container iteration order: a stable two-key sort guarantees it no matter
/// what map backs the counts.
pub fn rank(counts: WordCounts) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = counts
        .into_iter()
        .map(|(word, count)| RankedEntry { count, word })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(pairs: &[(&str, u64)]) -> Vec<(u64, String)> {
        let mut counts = WordCounts::new();
        for (word, n) in pairs {
            for _ in 0..*n {
                counts.record((*word).to_owned());
            }
        }
        rank(counts)
            .into_iter()
            .map(|e| (e.count, e.word))
            .collect()
    }

    #[test]
    fn higher_counts_come_first() {
        let out = ranked(&[("rare", 1), ("common", 5), ("middling", 3)]);
        assert_eq!(
            out,
            [
                (5, "common".to_owned()),
                (3, "middling".to_owned()),
                (1, "rare".to_owned()),
            ]
        );
    }

    #[test]
    fn ties_are_word_ascending() {
        let out = ranked(&[("pear", 2), ("apple", 2), ("mango", 2)]);
        assert_eq!(
            out,
            [
                (2, "apple".to_owned()),
                (2, "mango".to_owned()),
                (2, "pear".to_owned()),
            ]
        );
    }

    #[test]
    fn mixed_counts_and_ties() {
        let out = ranked(&[("the", 3), ("cat", 2), ("sat", 1), ("on", 1), ("ran", 1)]);
        assert_eq!(
            out,
            [
                (3, "the".to_owned()),
                (2, "cat".to_owned()),
                (1, "on".to_owned()),
                (1, "ran".to_owned()),
                (1, "sat".to_owned()),
            ]
        );
    }

    #[test]
    fn empty_counts_rank_to_nothing() {
        assert!(rank(WordCounts::new()).is_empty());
    }
}
