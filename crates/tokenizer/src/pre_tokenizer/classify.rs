//! Character classification for word scanning.

/// Role of a character inside a raw word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Alphabetic; accumulates into the current letter run
    Letter,
    /// Anything else; stands alone as its own one-symbol word
    Standalone,
}

/// Classify a character.
#[inline]
pub fn classify(ch: char) -> CharClass {
    if ch.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Standalone
    }
}
