//! Pre-tokenization pipeline.
//!
//! This module turns raw sentences into word chains of base symbols before
//! merge learning starts.

pub mod classify;
pub mod normalize;

pub use classify::{classify, CharClass};
pub use normalize::{NormalizationForm, Normalizer};
