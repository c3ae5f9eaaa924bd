//! libcitation crate root
//!
//! Cuneiform sign input with source citations, built on libcuneiform-core.
//!
//! A reading may cite the sign list it is taken from with a single glyph:
//! `anM` is `an` as listed in Borger's MesZL. Citations are spelled out in
//! the hint (`an (Borger MesZL)`), and among otherwise equal readings the
//! most recently published source sorts first. Uncited readings sort before
//! every cited one.
//!
//! ```rust
//! use libcitation::{inputs_ordered, pretty_transcription_hint};
//!
//! assert!(inputs_ordered("an", "anM"));
//! assert!(inputs_ordered("anM", "anA"));
//! assert_eq!(pretty_transcription_hint("anM", 3), "an (Borger MesZL)‸");
//! ```
//!
//! Public API exported here:
//! - `CitationConfig` from `config`
//! - `Engine` and the free functions over the process-wide engine from `engine`

pub mod config;
pub mod engine;

// Convenience re-exports for common types used by callers.
pub use libcuneiform_core::{Candidate, CompositionInput, ConfigError, OrderingKey, SourceEntry, SourceOrder};

pub use config::CitationConfig;
pub use engine::{
    build_engine, engine, inputs_ordered, install, ordering_key, pretty_transcription_hint, Engine,
};
