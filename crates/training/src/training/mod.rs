//! Training infrastructure for BPE vocabularies.
//!
//! This module provides pair counting over word chains and the merge loop
//! that learns the vocabulary.

pub mod counter;
pub mod trainer;

pub use counter::{PairCounter, Sentence};
pub use trainer::{BuildState, StopReason, TrainingConfig, TrainingReport, VocabularyBuilder};
