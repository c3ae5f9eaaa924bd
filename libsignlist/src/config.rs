use std::path::Path;

use libcuneiform_core::{ConfigError, SignListEntry, SignListTable};
use serde::{Deserialize, Serialize};

/// Sign-list configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All rendering options from `libcuneiform_core::Config` (flattened via serde)
/// - The sign-list catalogues reachable in list mode, with their display names
///
/// # Example
///
/// ```rust
/// use libsignlist::SignListConfig;
///
/// let config = SignListConfig::from_toml_str(
///     r#"
///     caret_marker = "|"
///
///     [[sign_lists]]
///     prefix = "mzl"
///     name = "MZL"
///     "#,
/// )
/// .unwrap();
/// assert_eq!(config.sign_lists.len(), 1);
/// assert_eq!(config.base().caret_marker, '|');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SignListConfig {
    /// Base configuration fields (caret marker, accents, variant label)
    #[serde(flatten)]
    pub base: libcuneiform_core::Config,

    /// Catalogues, keyed by the prefix typed after the wildcard.
    #[serde(default = "default_sign_lists")]
    pub sign_lists: Vec<SignListEntry>,
}

impl Default for SignListConfig {
    fn default() -> Self {
        Self {
            base: libcuneiform_core::Config::default(),
            sign_lists: default_sign_lists(),
        }
    }
}

impl SignListConfig {
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

    /// Validate the catalogues and build the lookup table.
    pub fn build_table(&self) -> Result<SignListTable, ConfigError> {
        SignListTable::new(&self.sign_lists)
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

/// The catalogues known to the sign-list input method, with the names they
/// are cited under.
fn default_sign_lists() -> Vec<SignListEntry> {
    [
        ("abzl", "aBZL"),
        ("bau", "BAU"),
        ("elles", "ELLes"),
        ("ḫzl", "HZL"),
        ("kwu", "KWU"),
        ("lak", "LAK"),
        ("mea", "MÉA"),
        ("mzl", "MZL"),
        ("ptaše", "PTACE"),
        ("reš", "RÉC"),
        ("rsp", "RSP"),
        ("šl", "ŠL"),
        ("zatu", "ZATU"),
    ]
    .into_iter()
    .map(|(prefix, name)| SignListEntry::new(prefix, name))
    .collect()
}
