//! # libsignlist
//!
//! Cuneiform sign input with sign-list catalogue references, built on
//! libcuneiform-core.
//!
//! Besides readings (`lugal`, `an2`, `d+utu`), a composition starting with
//! the wildcard `x` refers to a sign by its number in a catalogue:
//! `xmzl839` is entry 839 of Borger's MZL and is hinted as `MZL 839`.
//!
//! ```rust
//! use libsignlist::{inputs_ordered, pretty_transcription_hint};
//!
//! assert!(inputs_ordered("xmzl1", "lugal"));
//! assert_eq!(pretty_transcription_hint("xmzl839", 7), "MZL 839‸");
//! ```

pub mod config;
pub mod engine;

// Re-export the core types callers need alongside the free functions.
pub use libcuneiform_core::{Candidate, CompositionInput, ConfigError, OrderingKey, SignListEntry};

pub use config::SignListConfig;
pub use engine::{
    build_engine, engine, inputs_ordered, install, ordering_key, pretty_transcription_hint, Engine,
};
