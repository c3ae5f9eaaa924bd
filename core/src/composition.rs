//! Composition input with the entered-size cursor.
//!
//! The composition is what the user has typed for one sign, or a candidate's
//! full composition when rendering a hint for it. `entered_size` counts the
//! characters the user has actually typed: a hint for the candidate `an2`
//! while the user has typed `an` has an entered size of 2.

use unicode_normalization::UnicodeNormalization;

/// A composition input, NFC-normalized, with its entered size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionInput {
    chars: Vec<char>,
    entered_size: usize,
}

impl CompositionInput {
    /// Create a composition whose first `entered_size` characters have been
    /// typed.
    ///
    /// The text is normalized to NFC so that, e.g., `s` followed by a
    /// combining caron is the letter `š`; `entered_size` is remapped onto the
    /// normalized characters.
    pub fn new(text: &str, entered_size: usize) -> Self {
        debug_assert!(
            entered_size <= text.chars().count(),
            "entered size {entered_size} exceeds composition {text:?}"
        );
        let chars: Vec<char> = text.nfc().collect();
        let entered_size = text
            .chars()
            .take(entered_size)
            .nfc()
            .count()
            .min(chars.len());
        Self {
            chars,
            entered_size,
        }
    }

    /// Create a fully entered composition.
    pub fn from_text(text: &str) -> Self {
        let chars: Vec<char> = text.nfc().collect();
        let entered_size = chars.len();
        Self {
            chars,
            entered_size,
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The normalized text.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn entered_size(&self) -> usize {
        self.entered_size
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_fully_entered(&self) -> bool {
        self.entered_size == self.chars.len()
    }
}
