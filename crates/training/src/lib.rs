//! Mergewise-training - BPE merge learning
//!
//! This crate provides the merge loop that learns a vocabulary from
//! normalized word chains.
//!
//! # Features
//!
//! - Pair frequency counting, sequential or with rayon
//! - Deterministic best-pair selection and monotonic id minting
//! - Step-wise or whole-run training with a summary report
//!
//! # Example
//!
//! ```rust
//! use mergewise_core::SymbolSequence;
//! use mergewise_training::{PairCounter, VocabularyBuilder};
//!
//! let word: SymbolSequence = "banana".chars().map(|c| c as u32).collect();
//! let mut counter = PairCounter::from_sentences(vec![vec![word]]);
//!
//! let mut builder = VocabularyBuilder::with_vocab_size(5);
//! let (vocab, report) = builder.train(&mut counter)?;
//! assert_eq!(vocab.len(), 5);
//! assert_eq!(report.merges.len(), 2);
//! # Ok::<(), mergewise_core::VocabError>(())
//! ```

pub use mergewise_core::{Result, VocabError};

// Training infrastructure
pub mod training;
pub use training::{
    BuildState, PairCounter, Sentence, StopReason, TrainingConfig, TrainingReport,
    VocabularyBuilder,
};
