//! The engine only sees the annotation table through its trait, so callers
//! can inject their own.

use libcuneiform_core::annotation::{AnnotationText, Lookup};
use libcuneiform_core::{
    Annotation, AnnotationKind, AnnotationTable, CompositionInput, Config, Engine, SourceEntry,
    SourceOrder,
};

/// Cites a single source with any uppercase glyph.
#[derive(Debug)]
struct AnyCapital {
    source: SourceEntry,
}

impl AnnotationTable for AnyCapital {
    fn kind(&self) -> AnnotationKind {
        AnnotationKind::Citation
    }

    fn len(&self) -> usize {
        1
    }

    fn match_or_lookup(&self, lookup: Lookup<'_>) -> Option<Annotation<'_>> {
        match lookup {
            Lookup::Glyph(ch) if ch.is_ascii_uppercase() => Some(Annotation::Citation(&self.source)),
            _ => None,
        }
    }

    fn render_annotation<'a>(
        &'a self,
        annotation: &Annotation<'a>,
        _offset: usize,
    ) -> AnnotationText<'a> {
        match *annotation {
            Annotation::Citation(source) => AnnotationText {
                lead: "",
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

fn engine() -> Engine<AnyCapital> {
    let table = AnyCapital {
        source: SourceEntry::new('Q', None, "CDLI", 2000),
    };
    Engine::new(Config::default(), table)
}

#[test]
fn test_injected_table_renders_and_sorts() {
    let engine = engine();
    assert_eq!(engine.pretty_hint("anZ", 3), "an (CDLI)‸");
    assert_eq!(
        engine.ordering_key("anZ").source_order(),
        SourceOrder::cited(2000)
    );
    assert!(engine.inputs_ordered("an", "anB"));
    assert_eq!(engine.ordering_key("anB"), engine.ordering_key("anY"));
}

#[test]
fn test_leading_wildcard_without_sign_lists() {
    let engine = engine();
    let comp = CompositionInput::new("xab", 3);
    assert_eq!(engine.hint_for(&comp), "xab‸");
    assert_eq!(
        engine.key_for(&comp).reading().groups()[0].weights(),
        &[i64::MAX]
    );
}
