//! Annotation tables: sign-list catalogues and source citations.
//!
//! A deployment carries exactly one annotation table. The tokenizer, key
//! builder and hint renderer only talk to it through [`AnnotationTable`], so
//! the same engine serves both schemes:
//!
//! - [`SignListTable`]: a leading wildcard switches the composition into list
//!   mode (`xabzl1` is entry 1 of the catalogue typed as `abzl`), and the
//!   catalogue prefix is displayed under its conventional name (`aBZL`).
//! - [`CitationTable`]: single glyphs (`A`, `L`, `M`, ...) cite the sign list
//!   a reading is taken from; the most recent publication sorts first.

use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::error::ConfigError;
use crate::key::SourceOrder;
use crate::segment::{is_reading_char, VARIANT_MARKER};
use crate::trie::PrefixTrie;

/// Which annotation scheme a table implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    SignList,
    Citation,
}

/// What the tokenizer or renderer asks the table about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'i> {
    /// The catalogue-name part of a list-mode composition.
    ListName(&'i [char]),
    /// A single character of a reading-mode composition.
    Glyph(char),
}

/// A successful table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation<'a> {
    /// A catalogue whose prefix spans the first `prefix_len` characters of the
    /// list name.
    SignList {
        prefix_len: usize,
        entry: &'a SignListEntry,
    },
    /// A cited source.
    Citation(&'a SourceEntry),
}

/// Display text of an annotation, split at the caret position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnnotationText<'a> {
    /// Text shown before the caret, if the caret falls on this annotation.
    pub lead: &'a str,
    pub body: &'a str,
}

/// The injected annotation strategy.
pub trait AnnotationTable: fmt::Debug + Send + Sync {
    fn kind(&self) -> AnnotationKind;

    /// Number of configured entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve a lookup against the table.
    fn match_or_lookup(&self, lookup: Lookup<'_>) -> Option<Annotation<'_>>;

    /// Display text for `annotation`. For sign lists, `offset` selects the
    /// part of the display name standing in for the `offset`-th prefix
    /// character; citations ignore it.
    fn render_annotation<'a>(&'a self, annotation: &Annotation<'a>, offset: usize)
        -> AnnotationText<'a>;

    /// Contribution of `annotation` to the source level of the ordering key.
    fn sort_key_contribution(&self, annotation: &Annotation<'_>) -> Option<SourceOrder>;
}

/// A sign-list catalogue: the prefix typed after the wildcard, and the name
/// it is displayed as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignListEntry {
    pub prefix: String,
    pub name: String,
}

impl SignListEntry {
    pub fn new<P: Into<String>, N: Into<String>>(prefix: P, name: N) -> Self {
        Self {
            prefix: prefix.into(),
            name: name.into(),
        }
    }
}

/// Sign-list catalogues indexed by prefix.
#[derive(Debug)]
pub struct SignListTable {
    entries: Vec<SignListEntry>,
    trie: PrefixTrie<usize>,
}

impl SignListTable {
    pub fn new(entries: &[SignListEntry]) -> Result<Self, ConfigError> {
        // Prefixes are matched against NFC-normalized compositions.
        let entries: Vec<SignListEntry> = entries
            .iter()
            .map(|e| SignListEntry::new(e.prefix.nfc().collect::<String>(), e.name.as_str()))
            .collect();
        let mut trie = PrefixTrie::new();
        for (idx, entry) in entries.iter().enumerate() {
            if entry.prefix.is_empty() {
                return Err(ConfigError::EmptyPrefix {
                    name: entry.name.clone(),
                });
            }
            if entry.prefix.chars().any(|c| c.is_ascii_digit()) {
                return Err(ConfigError::DigitInPrefix {
                    prefix: entry.prefix.clone(),
                });
            }
            if entry.name.is_empty() {
                return Err(ConfigError::EmptyDisplayName {
                    prefix: entry.prefix.clone(),
                });
            }
            if trie.insert(&entry.prefix, idx).is_some() {
                return Err(ConfigError::DuplicatePrefix {
                    prefix: entry.prefix.clone(),
                });
            }
        }
        debug!(entries = entries.len(), "built sign list table");
        Ok(Self { entries, trie })
    }

    pub fn entries(&self) -> &[SignListEntry] {
        &self.entries
    }
}

impl AnnotationTable for SignListTable {
    fn kind(&self) -> AnnotationKind {
        AnnotationKind::SignList
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn match_or_lookup(&self, lookup: Lookup<'_>) -> Option<Annotation<'_>> {
        match lookup {
            Lookup::ListName(name) => {
                let (prefix_len, &idx) = self.trie.longest_prefix(name)?;
                Some(Annotation::SignList {
                    prefix_len,
                    entry: &self.entries[idx],
                })
            }
            Lookup::Glyph(_) => None,
        }
    }

    fn render_annotation<'a>(
        &'a self,
        annotation: &Annotation<'a>,
        offset: usize,
    ) -> AnnotationText<'a> {
        match *annotation {
            Annotation::SignList { prefix_len, entry } => AnnotationText {
                lead: "",
                body: display_slice(&entry.name, offset, prefix_len),
            },
            Annotation::Citation(_) => AnnotationText::default(),
        }
    }

    fn sort_key_contribution(&self, _annotation: &Annotation<'_>) -> Option<SourceOrder> {
        None
    }
}

/// The part of `name` shown for the `offset`-th of `prefix_len` prefix
/// characters. Characters pair up one to one; a longer name spills onto the
/// last prefix character.
fn display_slice(name: &str, offset: usize, prefix_len: usize) -> &str {
    if offset >= prefix_len {
        return "";
    }
    let start = name.char_indices().nth(offset).map(|(b, _)| b);
    let Some(start) = start else {
        return "";
    };
    if offset + 1 == prefix_len {
        return &name[start..];
    }
    let end = name
        .char_indices()
        .nth(offset + 1)
        .map_or(name.len(), |(b, _)| b);
    &name[start..end]
}

/// A cited source: the glyph typed for it and how it is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub glyph: char,
    /// Shown before the title; the caret never falls on it.
    #[serde(default)]
    pub author: Option<String>,
    pub title: String,
    /// Publication year; later publications sort first.
    pub year: i32,
}

impl SourceEntry {
    pub fn new<T: Into<String>>(glyph: char, author: Option<&str>, title: T, year: i32) -> Self {
        Self {
            glyph,
            author: author.map(str::to_string),
            title: title.into(),
            year,
        }
        .normalized()
    }

    /// Ensure the author, when present, ends in exactly one space.
    fn normalized(mut self) -> Self {
        self.author = self
            .author
            .map(|a| a.trim_end().to_string())
            .filter(|a| !a.is_empty())
            .map(|a| a + " ");
        self
    }
}

/// Source citations indexed by glyph.
#[derive(Debug)]
pub struct CitationTable {
    sources: AHashMap<char, SourceEntry>,
}

impl CitationTable {
    pub fn new(sources: &[SourceEntry]) -> Result<Self, ConfigError> {
        let mut map = AHashMap::with_capacity(sources.len());
        for source in sources {
            let glyph = source.glyph;
            if is_reading_char(glyph) || glyph == VARIANT_MARKER || glyph.is_whitespace() {
                return Err(ConfigError::ReservedGlyph { glyph });
            }
            if map.insert(glyph, source.clone().normalized()).is_some() {
                return Err(ConfigError::DuplicateGlyph { glyph });
            }
        }
        debug!(entries = map.len(), "built citation table");
        Ok(Self { sources: map })
    }

    pub fn source(&self, glyph: char) -> Option<&SourceEntry> {
        self.sources.get(&glyph)
    }
}

impl AnnotationTable for CitationTable {
    fn kind(&self) -> AnnotationKind {
        AnnotationKind::Citation
    }

    fn len(&self) -> usize {
        self.sources.len()
    }

    fn match_or_lookup(&self, lookup: Lookup<'_>) -> Option<Annotation<'_>> {
        match lookup {
            Lookup::Glyph(glyph) => self.sources.get(&glyph).map(Annotation::Citation),
            Lookup::ListName(_) => None,
        }
    }

    fn render_annotation<'a>(
        &'a self,
        annotation: &Annotation<'a>,
        _offset: usize,
    ) -> AnnotationText<'a> {
        match *annotation {
            Annotation::Citation(source) => AnnotationText {
                lead: source.author.as_deref().unwrap_or(""),
                body: &source.title,
            },
            Annotation::SignList { .. } => AnnotationText::default(),
        }
    }

    fn sort_key_contribution(&self, annotation: &Annotation<'_>) -> Option<SourceOrder> {
        match annotation {
            Annotation::Citation(source) => Some(SourceOrder::cited(source.year)),
            Annotation::SignList { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists() -> SignListTable {
        SignListTable::new(&[
            SignListEntry::new("abzl", "aBZL"),
            SignListEntry::new("reš", "RÉC"),
            SignListEntry::new("šl", "ŠL"),
            SignListEntry::new("elles", "ELLes"),
        ])
        .unwrap()
    }

    fn sources() -> CitationTable {
        CitationTable::new(&[
            SourceEntry::new('A', Some("Borger"), "ABZ", 1978),
            SourceEntry::new('L', None, "Labat", 1976),
        ])
        .unwrap()
    }

    #[test]
    fn test_sign_list_longest_prefix() {
        let table = lists();
        let name: Vec<char> = "rešx".chars().collect();
        match table.match_or_lookup(Lookup::ListName(&name)) {
            Some(Annotation::SignList { prefix_len, entry }) => {
                assert_eq!(prefix_len, 3);
                assert_eq!(entry.name, "RÉC");
            }
            other => panic!("unexpected lookup result {other:?}"),
        }
        assert!(table.match_or_lookup(Lookup::Glyph('A')).is_none());
    }

    #[test]
    fn test_sign_list_display_per_character() {
        let table = lists();
        let name: Vec<char> = "abzl".chars().collect();
        let ann = table.match_or_lookup(Lookup::ListName(&name)).unwrap();
        let shown: Vec<&str> = (0..4)
            .map(|i| table.render_annotation(&ann, i).body)
            .collect();
        assert_eq!(shown, ["a", "B", "Z", "L"]);
        assert_eq!(table.render_annotation(&ann, 4).body, "");
    }

    #[test]
    fn test_display_slice_longer_name_spills_onto_last_character() {
        assert_eq!(display_slice("ELLes", 0, 2), "E");
        assert_eq!(display_slice("ELLes", 1, 2), "LLes");
        assert_eq!(display_slice("ŠL", 1, 3), "L");
        assert_eq!(display_slice("ŠL", 2, 3), "");
    }

    #[test]
    fn test_sign_list_rejects_bad_entries() {
        assert!(matches!(
            SignListTable::new(&[SignListEntry::new("", "X")]),
            Err(ConfigError::EmptyPrefix { .. })
        ));
        assert!(matches!(
            SignListTable::new(&[SignListEntry::new("ab1", "X")]),
            Err(ConfigError::DigitInPrefix { .. })
        ));
        assert!(matches!(
            SignListTable::new(&[SignListEntry::new("ab", "")]),
            Err(ConfigError::EmptyDisplayName { .. })
        ));
        assert!(matches!(
            SignListTable::new(&[SignListEntry::new("ab", "X"), SignListEntry::new("ab", "Y")]),
            Err(ConfigError::DuplicatePrefix { .. })
        ));
    }

    #[test]
    fn test_decomposed_prefix_is_normalized() {
        let table = SignListTable::new(&[SignListEntry::new("s\u{30C}l", "ŠL")]).unwrap();
        let name: Vec<char> = "šl".chars().collect();
        assert!(table.match_or_lookup(Lookup::ListName(&name)).is_some());
        assert_eq!(table.entries()[0].prefix, "šl");
    }

    #[test]
    fn test_citation_lookup_and_render() {
        let table = sources();
        let ann = table.match_or_lookup(Lookup::Glyph('A')).unwrap();
        let text = table.render_annotation(&ann, 0);
        assert_eq!(text.lead, "Borger ");
        assert_eq!(text.body, "ABZ");

        let labat = table.match_or_lookup(Lookup::Glyph('L')).unwrap();
        assert_eq!(table.render_annotation(&labat, 0).lead, "");
        assert!(table.match_or_lookup(Lookup::Glyph('Q')).is_none());
    }

    #[test]
    fn test_citation_contribution_is_negated_year() {
        let table = sources();
        let ann = table.match_or_lookup(Lookup::Glyph('A')).unwrap();
        assert_eq!(
            table.sort_key_contribution(&ann),
            Some(SourceOrder::cited(1978))
        );
    }

    #[test]
    fn test_citation_rejects_reserved_glyphs() {
        for glyph in ['a', 'š', '3', 'x', 'v', 'f', '+', '/', ':', '⫶', ' '] {
            let result = CitationTable::new(&[SourceEntry::new(glyph, None, "T", 2000)]);
            assert!(
                matches!(result, Err(ConfigError::ReservedGlyph { .. })),
                "{glyph:?} should be reserved"
            );
        }
        assert!(matches!(
            CitationTable::new(&[
                SourceEntry::new('A', None, "T", 2000),
                SourceEntry::new('A', None, "U", 2001),
            ]),
            Err(ConfigError::DuplicateGlyph { glyph: 'A' })
        ));
    }

    #[test]
    fn test_author_normalized_from_config() {
        let table = CitationTable::new(&[SourceEntry {
            glyph: 'M',
            author: Some("Borger".to_string()),
            title: "MesZL".to_string(),
            year: 2004,
        }])
        .unwrap();
        assert_eq!(table.source('M').unwrap().author.as_deref(), Some("Borger "));
    }
}
