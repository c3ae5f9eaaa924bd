//! libcuneiform-core
//!
//! Ordering keys and pretty transcription hints for cuneiform sign input,
//! shared by the scheme crates (libsignlist, libcitation).
//!
//! A composition is the Latin-letter transliteration a user types for one
//! cuneiform sign (`lugal`, `an2`, `d+utu`, `1/2iku`). The core turns a
//! composition into an [`OrderingKey`] that sorts candidates the way an
//! Assyriologist expects, and renders a hint that shows the composition as it
//! would be written in a transliteration (`a\u{301}n₂`, `ᵈutu`).
//!
//! Public API:
//! - `Engine` - Key builder, comparator and hint renderer over an annotation table
//! - `AnnotationTable` - Sign-list catalogues or source citations
//! - `OrderingKey` - Total order over compositions
//! - `CompositionInput` - Normalized composition with the entered-size cursor
//! - `Candidate` - Composition and the sign it produces
//! - `Config` - Rendering options
use serde::{Deserialize, Serialize};

pub mod alphabet;

pub mod annotation;
pub use annotation::{
    Annotation, AnnotationKind, AnnotationTable, CitationTable, SignListEntry, SignListTable,
    SourceEntry,
};

pub mod candidate;
pub use candidate::Candidate;

pub mod composition;
pub use composition::CompositionInput;

pub mod engine;
pub use engine::Engine;

pub mod error;
pub use error::ConfigError;

pub mod hint;

pub mod key;
pub use key::{OrderingKey, Reading, SourceOrder, WordGroup};

pub mod segment;

pub mod trie;

/// Generic configuration for hint rendering.
///
/// This config contains only scheme-agnostic fields. Sign-list catalogues and
/// citation sources belong in `SignListConfig` or `CitationConfig` in their
/// respective crates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Marker placed where the user's input ends.
    pub caret_marker: char,
    /// Render homophone indices 2 and 3 of single-vowel readings as acute
    /// and grave accents on the vowel.
    pub homophone_accents: bool,
    /// Label shown before a variant number, followed by a space.
    pub variant_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            caret_marker: hint::CARET,
            homophone_accents: true,
            variant_label: "variant".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
