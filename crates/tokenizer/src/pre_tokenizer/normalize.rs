//! Sentence normalization into word chains.
//!
//! Sentences are split on single spaces. Inside a raw word, runs of letters
//! become one chain and every other character becomes a chain of its own.
//! A raw word made of a single non-letter character yields nothing at all.

use super::classify::{classify, CharClass};
use mergewise_core::{SymbolId, SymbolSequence};
use mergewise_training::Sentence;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::mem;
use unicode_normalization::UnicodeNormalization;

/// Unicode normalization form applied before splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NormalizationForm {
    /// Canonical composition
    NFC,
    /// Canonical decomposition
    NFD,
    /// Compatibility composition
    NFKC,
    /// Compatibility decomposition
    NFKD,
    /// No normalization
    #[default]
    None,
}

/// Sentence normalizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    /// Fold letters to lowercase
    lowercase: bool,
    /// Unicode form to apply first
    form: NormalizationForm,
}

impl Normalizer {
    /// Create a normalizer with no Unicode normalization.
    pub fn new(lowercase: bool) -> Self {
        Self {
            lowercase,
            form: NormalizationForm::None,
        }
    }

    /// Set the Unicode normalization form.
    pub fn with_form(mut self, form: NormalizationForm) -> Self {
        self.form = form;
        self
    }

    /// Whether letters are folded to lowercase.
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    /// The Unicode normalization form.
    pub fn form(&self) -> NormalizationForm {
        self.form
    }

    /// Normalize every sentence of a corpus, keeping sentence order.
    pub fn normalize<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<Sentence> {
        sentences
            .iter()
            .map(|s| self.normalize_sentence(s.as_ref()))
            .collect()
    }

    /// Normalize one sentence into its word chains.
    pub fn normalize_sentence(&self, sentence: &str) -> Sentence {
        let text = self.apply_form(sentence);
        let mut words = Sentence::new();

        for raw in text.split(' ') {
            self.normalize_word(raw, &mut words);
        }

        words
    }

    fn apply_form<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.form {
            NormalizationForm::NFC => Cow::Owned(text.nfc().collect()),
            NormalizationForm::NFD => Cow::Owned(text.nfd().collect()),
            NormalizationForm::NFKC => Cow::Owned(text.nfkc().collect()),
            NormalizationForm::NFKD => Cow::Owned(text.nfkd().collect()),
            NormalizationForm::None => Cow::Borrowed(text),
        }
    }

    fn normalize_word(&self, raw: &str, words: &mut Sentence) {
        // A lone non-letter "word" is dropped rather than emitted.
        let emits_standalone = raw.chars().nth(1).is_some();
        let mut run = SymbolSequence::new();

        for ch in raw.chars() {
            match classify(ch) {
                CharClass::Letter if self.lowercase => {
                    for lower in ch.to_lowercase() {
                        run.push(lower as SymbolId);
                    }
                }
                CharClass::Letter => run.push(ch as SymbolId),
                CharClass::Standalone if emits_standalone => {
                    if !run.is_empty() {
                        words.push(mem::take(&mut run));
                    }
                    words.push(std::iter::once(ch as SymbolId).collect());
                }
                CharClass::Standalone => {}
            }
        }

        if !run.is_empty() {
            words.push(run);
        }
    }
}
