//! Mutable symbol chains for words under training.
//!
//! A word is stored as a singly linked chain inside a node arena. Links are
//! arena indices, so folding an adjacent pair rewrites the left node and
//! unlinks the right one in O(1) without shifting the remaining symbols.
//! Unlinked nodes stay in the arena until the sequence is dropped; a
//! training run never grows a word, so the arena never needs compaction.

use crate::core::merges::{Pair, SymbolId};

/// Node in the chain.
#[derive(Debug, Clone, Copy)]
struct Node {
    id: SymbolId,
    /// Arena index of the following node.
    next: Option<usize>,
}

/// Ordered chain of symbol ids supporting in-place pair merges.
#[derive(Debug, Clone, Default)]
pub struct SymbolSequence {
    /// Storage arena for nodes, including unlinked ones.
    nodes: Vec<Node>,
    /// Arena index of the first node.
    head: Option<usize>,
    /// Arena index of the last node.
    tail: Option<usize>,
    /// Number of linked nodes.
    len: usize,
}

impl SymbolSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sequence with arena capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Append a symbol at the end of the chain.
    pub fn push(&mut self, id: SymbolId) {
        let idx = self.nodes.len();
        self.nodes.push(Node { id, next: None });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Number of symbols in the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the chain holds no symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over the symbol ids front to back.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }

    /// Iterate over adjacent `(left, right)` pairs front to back.
    pub fn pairs(&self) -> impl Iterator<Item = Pair> + '_ {
        self.iter().zip(self.iter().skip(1))
    }

    /// Collect the ids into a vector.
    pub fn to_vec(&self) -> Vec<SymbolId> {
        self.iter().collect()
    }

    /// Fold every occurrence of `pair` into `new_id`, scanning left to right.
    ///
    /// The left node takes `new_id` and the right node is unlinked. Scanning
    /// resumes at the merged node, so occurrences never overlap.
    ///
    /// Returns the number of merges performed.
    pub fn merge_pair(&mut self, pair: Pair, new_id: SymbolId) -> usize {
        let mut merged = 0;
        let mut cursor = self.head;

        while let Some(idx) = cursor {
            let Some(next_idx) = self.nodes[idx].next else {
                break;
            };

            if self.nodes[idx].id == pair.0 && self.nodes[next_idx].id == pair.1 {
                let after = self.nodes[next_idx].next;
                self.nodes[idx].id = new_id;
                self.nodes[idx].next = after;
                if after.is_none() {
                    self.tail = Some(idx);
                }
                self.len -= 1;
                merged += 1;
                cursor = Some(idx);
            } else {
                cursor = Some(next_idx);
            }
        }

        merged
    }
}

impl FromIterator<SymbolId> for SymbolSequence {
    fn from_iter<I: IntoIterator<Item = SymbolId>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut seq = Self::with_capacity(iter.size_hint().0);
        for id in iter {
            seq.push(id);
        }
        seq
    }
}

impl PartialEq for SymbolSequence {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for SymbolSequence {}

impl<'a> IntoIterator for &'a SymbolSequence {
    type Item = SymbolId;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front-to-back iterator over a [`SymbolSequence`].
pub struct Iter<'a> {
    nodes: &'a [Node],
    cursor: Option<usize>,
}

impl Iterator for Iter<'_> {
    type Item = SymbolId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes[self.cursor?];
        self.cursor = node.next;
        Some(node.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(ids: &[u32]) -> SymbolSequence {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_push_and_iterate() {
        let mut s = SymbolSequence::new();
        assert!(s.is_empty());

        s.push(1);
        s.push(2);
        s.push(3);

        assert_eq!(s.len(), 3);
        assert_eq!(s.to_vec(), vec![1, 2, 3]);
        assert_eq!(s.pairs().collect::<Vec<_>>(), vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn test_merge_single_occurrence() {
        let mut s = seq(&[1, 2, 3, 4]);
        assert_eq!(s.merge_pair((2, 3), 9), 1);

        assert_eq!(s.to_vec(), vec![1, 9, 4]);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_merge_is_non_overlapping() {
        let mut s = seq(&[5, 5, 5]);
        assert_eq!(s.merge_pair((5, 5), 6), 1);
        assert_eq!(s.to_vec(), vec![6, 5]);

        let mut s = seq(&[5, 5, 5, 5]);
        assert_eq!(s.merge_pair((5, 5), 6), 2);
        assert_eq!(s.to_vec(), vec![6, 6]);
    }

    #[test]
    fn test_merge_at_tail_then_push() {
        let mut s = seq(&[1, 2]);
        assert_eq!(s.merge_pair((1, 2), 7), 1);
        assert_eq!(s.to_vec(), vec![7]);
        assert!(s.pairs().next().is_none());

        // Tail must point at the merged node.
        s.push(8);
        assert_eq!(s.to_vec(), vec![7, 8]);
    }

    #[test]
    fn test_merge_no_match() {
        let mut s = seq(&[1, 2, 3]);
        assert_eq!(s.merge_pair((3, 1), 9), 0);
        assert_eq!(s, seq(&[1, 2, 3]));
    }

    #[test]
    fn test_merge_empty_and_single() {
        let mut empty = SymbolSequence::new();
        assert_eq!(empty.merge_pair((1, 2), 3), 0);
        assert!(empty.is_empty());

        let mut single = seq(&[1]);
        assert_eq!(single.merge_pair((1, 1), 3), 0);
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_equality_ignores_arena_garbage() {
        let mut merged = seq(&[1, 2, 3]);
        merged.merge_pair((1, 2), 4);
        assert_eq!(merged, seq(&[4, 3]));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        // Reference rewrite over a plain vector.
        fn merge_vec(ids: &[u32], pair: Pair, new_id: u32) -> Vec<u32> {
            let mut out = Vec::with_capacity(ids.len());
            let mut i = 0;
            while i < ids.len() {
                if i + 1 < ids.len() && (ids[i], ids[i + 1]) == pair {
                    out.push(new_id);
                    i += 2;
                } else {
                    out.push(ids[i]);
                    i += 1;
                }
            }
            out
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn merge_matches_vector_rewrite(
                ids in proptest::collection::vec(0u32..4, 0..40),
                left in 0u32..4,
                right in 0u32..4,
            ) {
                let mut chain: SymbolSequence = ids.iter().copied().collect();
                let expected = merge_vec(&ids, (left, right), 100);

                let merged = chain.merge_pair((left, right), 100);

                prop_assert_eq!(chain.to_vec(), expected.clone());
                prop_assert_eq!(chain.len(), expected.len());
                prop_assert_eq!(merged, ids.len() - expected.len());
            }
        }
    }
}
