//! Symbol identifiers and merge records.
//!
//! Symbols are addressed by integer ids. Base symbols use the Unicode scalar
//! value of the character they stand for; composite symbols are minted one id
//! above the current maximum, so every composite id is strictly greater than
//! both of its parents.

use ahash::AHashMap;

/// Identifier of a base or composite symbol.
pub type SymbolId = u32;

/// An ordered pair of adjacent symbol ids: (left, right).
pub type Pair = (SymbolId, SymbolId);

/// Pair frequency table: pair -> number of adjacent occurrences.
pub type PairCounts = AHashMap<Pair, u64>;

/// One accepted merge step of a training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRecord {
    /// Zero-based position of this merge in the run
    pub rank: usize,
    /// The pair that was folded
    pub pair: Pair,
    /// Id minted for the folded pair
    pub new_id: SymbolId,
    /// Occurrences of the pair when it was selected
    pub count: u64,
    /// Number of in-place rewrites the merge performed
    pub rewrites: usize,
}

impl MergeRecord {
    /// Whether the minted id respects the monotonic allocation invariant.
    #[inline]
    pub fn is_monotonic(&self) -> bool {
        self.pair.0 < self.new_id && self.pair.1 < self.new_id
    }
}
