//! Process-wide sign-list engine.
//!
//! The engine is built once per process, either explicitly with [`install`]
//! or lazily from the default configuration on first use, and shared
//! read-only afterwards.

use libcuneiform_core::{ConfigError, OrderingKey, SignListTable};
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::SignListConfig;

/// The core engine over the sign-list table.
pub type Engine = libcuneiform_core::Engine<SignListTable>;

static ENGINE: OnceCell<Engine> = OnceCell::new();

/// Build an engine from `config` without installing it.
pub fn build_engine(config: SignListConfig) -> Result<Engine, ConfigError> {
    let table = config.build_table()?;
    Ok(Engine::new(config.into_base(), table))
}

/// Install the process-wide engine. Fails if one is already installed,
/// including one installed lazily by [`engine`].
pub fn install(config: SignListConfig) -> Result<&'static Engine, ConfigError> {
    let engine = build_engine(config)?;
    ENGINE
        .set(engine)
        .map_err(|_| ConfigError::AlreadyInstalled)?;
    debug!("installed sign list engine");
    ENGINE.get().ok_or(ConfigError::AlreadyInstalled)
}

/// The process-wide engine, installing the default configuration if none
/// has been installed yet.
pub fn engine() -> &'static Engine {
    ENGINE.get_or_init(|| {
        debug!("installing default sign list engine");
        let config = SignListConfig::default();
        let table = match config.build_table() {
            Ok(table) => table,
            Err(e) => unreachable!("default sign lists are valid: {e}"),
        };
        Engine::new(config.into_base(), table)
    })
}

/// Ordering key of a composition.
pub fn ordering_key(input: &str) -> OrderingKey {
    engine().ordering_key(input)
}

/// Whether `left` sorts strictly before `right`.
pub fn inputs_ordered(left: &str, right: &str) -> bool {
    engine().inputs_ordered(left, right)
}

/// Pretty hint for `input` with the caret after `entered_size` characters.
pub fn pretty_transcription_hint(input: &str, entered_size: usize) -> String {
    engine().pretty_hint(input, entered_size)
}
