// core/src/engine.rs
//
// Generic engine that works with any annotation table.
// libsignlist and libcitation only differ in the table they inject.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::annotation::AnnotationTable;
use crate::composition::CompositionInput;
use crate::hint;
use crate::key::OrderingKey;
use crate::segment::segments;
use crate::{Candidate, Config};

/// Generic engine combining the base configuration with an annotation table.
///
/// Type parameter A is the table type (`SignListTable` or `CitationTable`).
/// The engine is immutable once built, so a single instance can be shared
/// across threads.
#[derive(Debug)]
pub struct Engine<A> {
    config: Config,
    table: A,
}

impl<A: AnnotationTable> Engine<A> {
    pub fn new(config: Config, table: A) -> Self {
        debug!(
            kind = ?table.kind(),
            entries = table.len(),
            caret = %config.caret_marker,
            "engine created"
        );
        Self { config, table }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn table(&self) -> &A {
        &self.table
    }

    /// Ordering key of a fully entered composition.
    pub fn ordering_key(&self, input: &str) -> OrderingKey {
        self.key_for(&CompositionInput::from_text(input))
    }

    pub fn key_for(&self, input: &CompositionInput) -> OrderingKey {
        let segs = segments(input.chars(), &self.table);
        let key = OrderingKey::build(&segs, &self.table);
        trace!(input = %input.text(), %key, "ordering key");
        key
    }

    /// Three-way comparison of two compositions by their ordering keys.
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.ordering_key(left).cmp(&self.ordering_key(right))
    }

    /// Whether `left` sorts strictly before `right`.
    pub fn inputs_ordered(&self, left: &str, right: &str) -> bool {
        self.compare(left, right) == Ordering::Less
    }

    /// Comparator for `sort_by` over candidates; only compositions are
    /// compared.
    pub fn compare_candidates(&self, left: &Candidate, right: &Candidate) -> Ordering {
        self.compare(&left.composition, &right.composition)
    }

    /// Sort candidates in place, computing each key once.
    pub fn sort_candidates(&self, candidates: &mut [Candidate]) {
        candidates.sort_by_cached_key(|c| self.ordering_key(&c.composition));
    }

    /// Pretty hint for `input`, with the caret after `entered_size`
    /// characters.
    pub fn pretty_hint(&self, input: &str, entered_size: usize) -> String {
        self.hint_for(&CompositionInput::new(input, entered_size))
    }

    pub fn hint_for(&self, input: &CompositionInput) -> String {
        hint::render(input, &self.config, &self.table)
    }

    /// Strip the decorations of a hint rendered by this engine.
    pub fn skeleton(&self, hint: &str) -> String {
        hint::skeleton(hint, self.config.caret_marker)
    }
}
