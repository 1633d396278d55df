//! Vocabulary training entry points.
//!
//! This module ties the normalizer, the merge loop and the decoder together
//! behind two functions: [`train`], which returns the decoded token set, and
//! [`train_vocabulary`], which keeps the id-keyed vocabulary around as well.

use crate::pre_tokenizer::{NormalizationForm, Normalizer};
use mergewise_core::{Decoder, Result, SymbolId, VocabError, Vocabulary};
use mergewise_training::{PairCounter, TrainingConfig, TrainingReport, VocabularyBuilder};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Configuration for a training run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Target vocabulary size
    pub vocab_size: usize,
    /// Fold letters to lowercase
    pub lowercase: bool,
    /// Unicode normalization applied before splitting
    pub normalization: NormalizationForm,
    /// Count pairs with rayon
    pub parallel: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        let training = TrainingConfig::default();
        Self {
            vocab_size: training.vocab_size,
            lowercase: false,
            normalization: NormalizationForm::None,
            parallel: training.parallel,
        }
    }
}

impl TokenizerConfig {
    /// Start a builder with default settings.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Load a configuration from a JSON file.
    ///
    /// Missing fields keep their default values.
    ///
    /// # Arguments
    /// * `path` - Path of the JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|err| VocabError::Io {
            path: path.to_path_buf(),
            err,
        })?;

        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Normalizer described by this configuration.
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.lowercase).with_form(self.normalization)
    }

    /// Merge-loop settings described by this configuration.
    pub fn training(&self) -> TrainingConfig {
        TrainingConfig {
            vocab_size: self.vocab_size,
            parallel: self.parallel,
        }
    }
}

/// Builder for [`TokenizerConfig`].
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: TokenizerConfig::default(),
        }
    }

    /// Set the target vocabulary size.
    pub fn vocab_size(mut self, size: usize) -> Self {
        self.config.vocab_size = size;
        self
    }

    /// Fold letters to lowercase.
    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.config.lowercase = lowercase;
        self
    }

    /// Set the Unicode normalization form.
    pub fn normalization(mut self, form: NormalizationForm) -> Self {
        self.config.normalization = form;
        self
    }

    /// Count pairs in parallel.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Finish the configuration.
    pub fn build(self) -> TokenizerConfig {
        self.config
    }
}

/// Outcome of a training run: the definition table plus a run summary.
#[derive(Debug, Clone)]
pub struct TrainedVocabulary {
    vocab: Vocabulary,
    report: TrainingReport,
}

impl TrainedVocabulary {
    /// The id-keyed definition table.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Summary of the run.
    pub fn report(&self) -> &TrainingReport {
        &self.report
    }

    /// Number of minted ids, base and composite.
    pub fn len(&self) -> usize {
        self.vocab.len()
    }

    /// Check if no id was minted.
    pub fn is_empty(&self) -> bool {
        self.vocab.is_empty()
    }

    /// Decoded tokens; ids spelling the same text collapse.
    pub fn tokens(&self) -> Result<BTreeSet<String>> {
        Decoder::new(&self.vocab).decode_all()
    }

    /// Decoded text of every id, one entry per id.
    pub fn table(&self) -> Result<BTreeMap<SymbolId, String>> {
        Decoder::new(&self.vocab).decode_table()
    }
}

/// Learn a vocabulary and return its decoded token set.
///
/// # Arguments
/// * `sentences` - Raw sentences, in a fixed order
/// * `target_vocab_size` - Upper bound on the number of minted ids
/// * `lowercase` - Fold letters to lowercase
pub fn train<S: AsRef<str>>(
    sentences: &[S],
    target_vocab_size: usize,
    lowercase: bool,
) -> Result<BTreeSet<String>> {
    let config = TokenizerConfig::builder()
        .vocab_size(target_vocab_size)
        .lowercase(lowercase)
        .build();

    train_vocabulary(sentences, &config)?.tokens()
}

/// Learn a vocabulary and keep the id-keyed definition table.
pub fn train_vocabulary<S: AsRef<str>>(
    sentences: &[S],
    config: &TokenizerConfig,
) -> Result<TrainedVocabulary> {
    let normalized = config.normalizer().normalize(sentences);
    let mut counter = PairCounter::from_sentences(normalized);

    let mut builder = VocabularyBuilder::new(config.training());
    let (vocab, report) = builder.train(&mut counter)?;

    Ok(TrainedVocabulary { vocab, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mergewise_training::StopReason;

    const SAMPLE: [&str; 1] = ["This is a test."];

    #[test]
    fn test_sample_reaches_target() {
        let tokens = train(&SAMPLE, 13, true).unwrap();
        assert_eq!(tokens.len(), 13);

        for expected in ["t", "h", "i", "s", "a", "e", ".", "is", "this", "test"] {
            assert!(tokens.contains(expected), "missing {expected:?}");
        }
    }

    #[test]
    fn test_sample_runs_out_of_pairs() {
        let tokens = train(&SAMPLE, 14, true).unwrap();
        assert_eq!(tokens.len(), 13);

        let trained = train_vocabulary(
            &SAMPLE,
            &TokenizerConfig::builder()
                .vocab_size(14)
                .lowercase(true)
                .build(),
        )
        .unwrap();
        assert_eq!(trained.report().stop_reason, StopReason::PairsExhausted);
    }

    #[test]
    fn test_case_sensitive_run() {
        let tokens = train(&SAMPLE, 8, false).unwrap();
        // T, h, i, s, a, t, e, . are all distinct base symbols.
        assert_eq!(tokens.len(), 8);
        assert!(tokens.contains("T"));
        assert!(tokens.contains("t"));
    }

    #[test]
    fn test_target_below_base_symbols() {
        let tokens = train(&SAMPLE, 3, true).unwrap();
        let expected: BTreeSet<String> = ["t", "h", "i", "s", "a", "e", "."]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_empty_corpus() {
        let empty: [&str; 0] = [];
        assert!(train(&empty, 100, true).unwrap().is_empty());

        let trained = train_vocabulary(&[""], &TokenizerConfig::default()).unwrap();
        assert!(trained.is_empty());
        assert!(trained.report().merges.is_empty());
    }

    #[test]
    fn test_lone_punctuation_word_is_dropped() {
        let tokens = train(&["?"], 10, true).unwrap();
        assert!(tokens.is_empty());

        // Inside a longer word the same character survives.
        let tokens = train(&["?!"], 10, true).unwrap();
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_deterministic() {
        let corpus = [
            "the cat sat on the mat",
            "the dog sat on the log",
            "a cat and a dog",
        ];
        let first = train(&corpus, 40, true).unwrap();
        let second = train(&corpus, 40, true).unwrap();
        assert_eq!(first, second);

        let parallel = train_vocabulary(
            &corpus,
            &TokenizerConfig::builder()
                .vocab_size(40)
                .lowercase(true)
                .parallel(true)
                .build(),
        )
        .unwrap()
        .tokens()
        .unwrap();
        assert_eq!(first, parallel);
    }

    #[test]
    fn test_table_has_one_entry_per_id() {
        let trained = train_vocabulary(
            &["aaaa aaaa"],
            &TokenizerConfig::builder().vocab_size(10).build(),
        )
        .unwrap();

        let table = trained.table().unwrap();
        assert_eq!(table.len(), trained.len());
        assert_eq!(table.values().last().map(String::as_str), Some("aaaa"));
        assert!(trained.vocab().validate().is_ok());
    }

    #[test]
    fn test_config_from_json() {
        let config: TokenizerConfig =
            serde_json::from_str(r#"{"vocab_size": 37000, "lowercase": true, "normalization": "NFC"}"#)
                .unwrap();
        assert_eq!(config.vocab_size, 37_000);
        assert!(config.lowercase);
        assert_eq!(config.normalization, NormalizationForm::NFC);
        assert!(!config.parallel);
    }

    #[test]
    fn test_config_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"vocab_size": 500, "parallel": true}}"#).unwrap();
        file.flush().unwrap();

        let config = TokenizerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.vocab_size, 500);
        assert!(config.parallel);
        assert!(!config.lowercase);
        assert_eq!(config.normalization, NormalizationForm::None);
    }

    #[test]
    fn test_config_from_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = TokenizerConfig::from_file(&missing).unwrap_err();
        assert!(matches!(err, VocabError::Io { path, .. } if path == missing));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, r#"{"vocab_size": "many"}"#).unwrap();
        let err = TokenizerConfig::from_file(&broken).unwrap_err();
        assert!(matches!(err, VocabError::Json(_)));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(48))]

            #[test]
            fn small_targets_return_base_symbols(
                corpus in proptest::collection::vec("[a-dA-D.,!? ]{0,12}", 0..4),
            ) {
                let trained = train_vocabulary(&corpus, &TokenizerConfig::builder().vocab_size(0).build())
                    .unwrap();
                let tokens = trained.tokens().unwrap();

                prop_assert!(trained.report().merges.is_empty());
                prop_assert_eq!(tokens.len(), trained.report().base_symbols);
                prop_assert!(tokens.iter().all(|t| t.chars().count() == 1));
            }

            #[test]
            fn output_never_exceeds_target(
                corpus in proptest::collection::vec("[a-c ]{0,16}", 0..4),
                target in 0usize..24,
                lowercase in any::<bool>(),
            ) {
                let first = train(&corpus, target, lowercase).unwrap();
                let second = train(&corpus, target, lowercase).unwrap();

                prop_assert_eq!(&first, &second);
                prop_assert!(first.len() <= target.max(3));
            }
        }
    }
}
