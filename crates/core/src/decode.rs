//! Decoding symbol ids back to text.
//!
//! A base symbol decodes to its character; a composite decodes to the
//! concatenation of its parents. Expansion uses an explicit work stack and a
//! memo of already decoded ids, so long merge chains neither recurse deeply
//! nor get expanded twice.

use crate::core::merges::SymbolId;
use crate::core::vocab::Vocabulary;
use crate::error::{Result, VocabError};
use ahash::AHashMap;
use compact_str::CompactString;
use std::collections::{BTreeMap, BTreeSet};

/// Memoizing decoder over a finished vocabulary.
pub struct Decoder<'a> {
    vocab: &'a Vocabulary,
    memo: AHashMap<SymbolId, CompactString>,
}

impl<'a> Decoder<'a> {
    /// Create a decoder for the given vocabulary.
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Self {
            vocab,
            memo: AHashMap::with_capacity(vocab.len()),
        }
    }

    /// Decode one symbol id into the text it represents.
    pub fn decode(&mut self, id: SymbolId) -> Result<&str> {
        if !self.memo.contains_key(&id) {
            self.expand(id)?;
        }
        self.memo
            .get(&id)
            .map(CompactString::as_str)
            .ok_or(VocabError::InvalidReference { id })
    }

    fn expand(&mut self, root: SymbolId) -> Result<()> {
        let mut stack = vec![root];

        while let Some(&id) = stack.last() {
            if self.memo.contains_key(&id) {
                stack.pop();
                continue;
            }

            match self.vocab.definition(id) {
                None => return Err(VocabError::InvalidReference { id }),
                Some(None) => {
                    let ch = char::from_u32(id).ok_or(VocabError::InvalidReference { id })?;
                    let mut text = CompactString::default();
                    text.push(ch);
                    self.memo.insert(id, text);
                    stack.pop();
                }
                Some(Some((left, right))) => {
                    // Parents always sit below their child; anything else is a cycle.
                    if left >= id || right >= id {
                        return Err(VocabError::InvalidReference {
                            id: left.max(right),
                        });
                    }

                    let joined = match (self.memo.get(&left), self.memo.get(&right)) {
                        (Some(l), Some(r)) => {
                            let mut text = CompactString::with_capacity(l.len() + r.len());
                            text.push_str(l);
                            text.push_str(r);
                            Some(text)
                        }
                        _ => None,
                    };

                    match joined {
                        Some(text) => {
                            self.memo.insert(id, text);
                            stack.pop();
                        }
                        None => {
                            if !self.memo.contains_key(&right) {
                                stack.push(right);
                            }
                            if !self.memo.contains_key(&left) {
                                stack.push(left);
                            }
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Decode every id in ascending order into a table keyed by id.
    pub fn decode_table(&mut self) -> Result<BTreeMap<SymbolId, String>> {
        let vocab = self.vocab;
        let mut table = BTreeMap::new();
        for id in vocab.ids() {
            table.insert(id, self.decode(id)?.to_string());
        }
        Ok(table)
    }

    /// Decode every id in ascending order into a set of token strings.
    ///
    /// Ids that decode to the same text collapse into one entry.
    pub fn decode_all(&mut self) -> Result<BTreeSet<String>> {
        let vocab = self.vocab;
        let mut tokens = BTreeSet::new();
        for id in vocab.ids() {
            tokens.insert(self.decode(id)?.to_string());
        }
        Ok(tokens)
    }
}

/// Decode a single id without keeping a memo around.
pub fn decode(vocab: &Vocabulary, id: SymbolId) -> Result<String> {
    Decoder::new(vocab).decode(id).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab_for(chars: &str) -> Vocabulary {
        let mut vocab = Vocabulary::new();
        for ch in chars.chars() {
            vocab.insert_base(ch);
        }
        vocab
    }

    #[test]
    fn test_decode_base() {
        let vocab = vocab_for("ab");
        assert_eq!(decode(&vocab, 'a' as u32).unwrap(), "a");
    }

    #[test]
    fn test_decode_composite() {
        let mut vocab = vocab_for("hel");
        let he = vocab.mint(('h' as u32, 'e' as u32)).unwrap();
        let ll = vocab.mint(('l' as u32, 'l' as u32)).unwrap();
        let hell = vocab.mint((he, ll)).unwrap();

        let mut decoder = Decoder::new(&vocab);
        assert_eq!(decoder.decode(hell).unwrap(), "hell");
        assert_eq!(decoder.decode(ll).unwrap(), "ll");
    }

    #[test]
    fn test_decode_unknown_id() {
        let vocab = vocab_for("a");
        let err = decode(&vocab, 42).unwrap_err();
        assert!(matches!(err, VocabError::InvalidReference { id: 42 }));
    }

    #[test]
    fn test_decode_non_char_base() {
        let mut vocab = Vocabulary::new();
        vocab.insert_base_id(0xD800);
        assert!(matches!(
            decode(&vocab, 0xD800),
            Err(VocabError::InvalidReference { id: 0xD800 })
        ));
    }

    #[test]
    fn test_deep_chain() {
        let mut vocab = vocab_for("a");
        let mut last = 'a' as u32;
        for _ in 0..10_000 {
            last = vocab.mint((last, 'a' as u32)).unwrap();
        }

        let text = decode(&vocab, last).unwrap();
        assert_eq!(text.len(), 10_001);
        assert!(text.chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_decode_all_collapses_duplicates() {
        let mut vocab = vocab_for("ab");
        let a = 'a' as u32;
        let b = 'b' as u32;
        let ab = vocab.mint((a, b)).unwrap();
        let abb = vocab.mint((ab, b)).unwrap();
        let bb = vocab.mint((b, b)).unwrap();
        // "a" + "bb" spells the same text as "ab" + "b".
        vocab.mint((a, bb)).unwrap();
        assert_eq!(abb, ab + 1);

        let tokens = Decoder::new(&vocab).decode_all().unwrap();
        assert_eq!(vocab.len(), 6);
        assert_eq!(tokens.len(), 5);
        assert!(tokens.contains("abb"));

        let table = Decoder::new(&vocab).decode_table().unwrap();
        assert_eq!(table.len(), 6);
        assert_eq!(table[&ab], "ab");
    }
}
