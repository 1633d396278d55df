//! Deterministic selection of the next pair to merge.
//!
//! The pair frequency table is a hash map, so its iteration order is not
//! stable between runs. Selection therefore goes through a total order on
//! [`MergeCandidate`]: the highest count wins, and among equal counts the
//! smallest left id wins, then the smallest right id.

use crate::core::merges::{Pair, PairCounts};
use std::cmp::Ordering;

/// A merge candidate during BPE training.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeCandidate {
    /// The pair of symbol ids to merge
    pub pair: Pair,
    /// The frequency/count of this pair
    pub count: u64,
}

impl MergeCandidate {
    /// Create a new merge candidate.
    pub fn new(pair: Pair, count: u64) -> Self {
        Self { pair, count }
    }
}

// Greater = preferred. Higher count first, then the lexicographically smaller pair.
impl Ord for MergeCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.pair.cmp(&self.pair))
    }
}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pick the best pair from a frequency table.
///
/// Returns `None` when the table is empty.
pub fn select_best(counts: &PairCounts) -> Option<MergeCandidate> {
    counts
        .iter()
        .map(|(&pair, &count)| MergeCandidate::new(pair, count))
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highest_count_wins() {
        let mut counts = PairCounts::new();
        counts.insert((0, 1), 10);
        counts.insert((1, 2), 20);
        counts.insert((2, 3), 15);

        let best = select_best(&counts).unwrap();
        assert_eq!(best.pair, (1, 2));
        assert_eq!(best.count, 20);
    }

    #[test]
    fn test_tie_prefers_smallest_left_then_right() {
        let mut counts = PairCounts::new();
        counts.insert((5, 1), 3);
        counts.insert((2, 9), 3);
        counts.insert((2, 4), 3);
        counts.insert((7, 7), 1);

        assert_eq!(select_best(&counts).unwrap().pair, (2, 4));
    }

    #[test]
    fn test_empty_table() {
        assert!(select_best(&PairCounts::new()).is_none());
    }

    #[test]
    fn test_ordering() {
        let a = MergeCandidate::new((1, 2), 4);
        let b = MergeCandidate::new((0, 9), 4);
        let c = MergeCandidate::new((9, 9), 5);

        assert!(b > a);
        assert!(c > b);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }
}
