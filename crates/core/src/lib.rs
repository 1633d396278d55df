//! Mergewise-core - Core data structures for BPE vocabulary learning
//!
//! This crate provides the pieces the merge learner is built from,
//! independent of how text is split into words.
//!
//! # Features
//!
//! - Word chains with O(1) in-place pair merges
//! - Id-ordered definition table with monotonic id allocation
//! - Deterministic best-pair selection
//! - Memoizing decoder from ids back to text
//!
//! # Example
//!
//! ```rust
//! use mergewise_core::{decode, Vocabulary};
//!
//! let mut vocab = Vocabulary::new();
//! vocab.insert_base('h');
//! vocab.insert_base('i');
//! let hi = vocab.mint(('h' as u32, 'i' as u32))?;
//!
//! assert_eq!(decode(&vocab, hi)?, "hi");
//! # Ok::<(), mergewise_core::VocabError>(())
//! ```

pub mod error;
pub use error::{Result, VocabError};

// Core BPE data structures
pub mod core;
pub use crate::core::{
    select_best, Definition, MergeCandidate, MergeRecord, Pair, PairCounts, SymbolId,
    SymbolSequence, Vocabulary,
};

// Decoding ids back to text
pub mod decode;
pub use decode::{decode, Decoder};
