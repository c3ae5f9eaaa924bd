//! Candidate signs offered for a composition.

use serde::{Deserialize, Serialize};

/// A sign offered to the user, with the composition that produces it.
///
/// Candidates are ordered by their composition only; see
/// [`Engine::compare_candidates`](crate::Engine::compare_candidates).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub composition: String,
    pub text: String,
}

impl Candidate {
    pub fn new<C: Into<String>, T: Into<String>>(composition: C, text: T) -> Self {
        Candidate {
            composition: composition.into(),
            text: text.into(),
        }
    }

    /// Parse a `composition<TAB>text` line. A line without a tab is a bare
    /// composition with empty text.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return None;
        }
        let (composition, text) = line.split_once('\t').unwrap_or((line, ""));
        let composition = composition.trim();
        if composition.is_empty() {
            return None;
        }
        Some(Candidate::new(composition, text.trim()))
    }
}
