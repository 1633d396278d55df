//! Core BPE data structures.
//!
//! This module contains the symbol id space, the mutable word chains the
//! merge loop rewrites, the definition table and pair selection.

pub mod merges;
pub mod priority;
pub mod sequence;
pub mod vocab;

pub use merges::{MergeRecord, Pair, PairCounts, SymbolId};
pub use priority::{select_best, MergeCandidate};
pub use sequence::SymbolSequence;
pub use vocab::{Definition, Vocabulary};
