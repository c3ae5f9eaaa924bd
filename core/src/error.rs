//! Configuration errors.
//!
//! Operations on composition inputs are total and never fail; only building
//! the long-lived configuration and annotation tables can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("sign list prefix for {name:?} is empty")]
    EmptyPrefix { name: String },

    #[error("sign list prefix {prefix:?} contains a digit")]
    DigitInPrefix { prefix: String },

    #[error("sign list prefix {prefix:?} has an empty display name")]
    EmptyDisplayName { prefix: String },

    #[error("sign list prefix {prefix:?} is configured twice")]
    DuplicatePrefix { prefix: String },

    #[error("citation glyph {glyph:?} is reserved for readings")]
    ReservedGlyph { glyph: char },

    #[error("citation glyph {glyph:?} is configured twice")]
    DuplicateGlyph { glyph: char },

    #[error("an engine has already been installed for this process")]
    AlreadyInstalled,
}
