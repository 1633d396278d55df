//! Mergewise-tokenizer - Vocabulary learning API
//!
//! This crate turns raw sentences into a learned subword vocabulary,
//! integrating normalization, the merge loop and decoding behind one call.
//!
//! # Features
//!
//! - Space splitting with letter runs and standalone punctuation
//! - Optional lowercasing and Unicode normalization
//! - Two-column translation corpus reader
//! - Decoded token set, or the id-keyed vocabulary behind it
//!
//! # Example
//!
//! ```rust
//! use mergewise_tokenizer::train;
//!
//! let tokens = train(&["This is a test."], 13, true)?;
//! assert_eq!(tokens.len(), 13);
//! assert!(tokens.contains("test"));
//! # Ok::<(), mergewise_tokenizer::VocabError>(())
//! ```

// Re-export core types
pub use mergewise_core::{Result, SymbolId, VocabError, Vocabulary};
pub use mergewise_training::{StopReason, TrainingReport};

// Training API
pub mod tokenizer;
pub use tokenizer::{train, train_vocabulary, TokenizerBuilder, TokenizerConfig, TrainedVocabulary};

// Corpus input
pub mod io;
pub use io::{Column, CorpusReader, Translation};

// Pre-tokenization
pub mod pre_tokenizer;
pub use pre_tokenizer::{classify, CharClass, NormalizationForm, Normalizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
