//! Corpus input.
//!
//! This module reads translation corpora from disk and selects which
//! text column(s) are used for training.

pub mod corpus;

pub use corpus::{Column, CorpusReader, Translation};
