//! Source-citation configuration.

use std::path::Path;

use libcuneiform_core::{CitationTable, ConfigError, SourceEntry};
use serde::{Deserialize, Serialize};

/// Citation-specific configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All rendering options from `libcuneiform_core::Config` (flattened via serde)
/// - The cited sources: the glyph typed for each, its author and title as
///   shown in hints, and its publication year
///
/// # Example
///
/// ```rust
/// use libcitation::CitationConfig;
///
/// let config = CitationConfig::default();
/// assert_eq!(config.sources.len(), 3);
/// let base_config = config.into_base();
/// assert!(base_config.homophone_accents);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CitationConfig {
    /// Base configuration fields (caret marker, accents, variant label)
    #[serde(flatten)]
    pub base: libcuneiform_core::Config,

    /// Cited sign lists, keyed by glyph.
    #[serde(default = "default_sources")]
    pub sources: Vec<SourceEntry>,
}

impl Default for CitationConfig {
    fn default() -> Self {
        Self {
            base: libcuneiform_core::Config::default(),
            sources: default_sources(),
        }
    }
}

impl CitationConfig {
    /// Convert this config into the base config.
    pub fn into_base(self) -> libcuneiform_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &libcuneiform_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut libcuneiform_core::Config {
        &mut self.base
    }

    /// Validate the sources and build the lookup table.
    pub fn build_table(&self) -> Result<CitationTable, ConfigError> {
        CitationTable::new(&self.sources)
    }

    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?)
    }

    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Borger's ABZ and MesZL and Labat's Manuel, the lists most readings are
/// cited from.
fn default_sources() -> Vec<SourceEntry> {
    vec![
        SourceEntry::new('A', Some("Borger"), "ABZ", 1978),
        SourceEntry::new('L', None, "Labat", 1976),
        SourceEntry::new('M', Some("Borger"), "MesZL", 2004),
    ]
}
