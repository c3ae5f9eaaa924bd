//! Tokenizer for composition inputs.
//!
//! A composition interleaves several small languages in one flat string:
//! readings (`lugal`, `1/2iku`), joins (`d+utu`, `ka+li`), variants (`v2`),
//! citations (`A`, `M`) and, after a leading wildcard, sign-list references
//! (`xabzl123`). [`classify`] assigns each character a [`Symbol`];
//! [`segments`] runs the category state machine over those symbols in a
//! single pass and emits the [`Segment`] stream the key builder folds into an
//! [`OrderingKey`](crate::key::OrderingKey).

use std::ops::Range;

use crate::alphabet::{self, ALEPH_RANK};
use crate::annotation::{Annotation, AnnotationKind, AnnotationTable, Lookup};

/// Unknown sign, or in sign-list deployments the list-mode introducer.
pub const WILDCARD: char = 'x';
pub const VARIANT_MARKER: char = 'v';
pub const FRACTION_SLASH: char = '/';
pub const JOIN_PLUS: char = '+';
pub const JOIN_MINUS: char = '-';

/// Whether `ch` belongs to the reading proper. The first character that does
/// not opens the parenthetical part of the hint.
pub fn is_reading_char(ch: char) -> bool {
    ch.is_ascii_digit()
        || alphabet::is_letter(ch)
        || matches!(ch, '/' | ':' | '⫶' | 'f' | 'x' | '+' | '-')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinPolarity {
    Minus,
    Plus,
}

impl JoinPolarity {
    pub fn weight(self) -> i64 {
        match self {
            JoinPolarity::Minus => 0,
            JoinPolarity::Plus => 1,
        }
    }
}

/// Classification of a single composition character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol<'a> {
    /// Alphabet letter with its collation rank.
    Letter(u8),
    Digit(u8),
    Wildcard,
    Join(JoinPolarity),
    FractionSlash,
    VariantMarker,
    /// Reading punctuation and determinative shorthands (`:`, `⫶`, `f`);
    /// displayed but not collated.
    Silent,
    /// A citation glyph known to the annotation table.
    Annotation(Annotation<'a>),
    /// Anything else; displayed literally, never collated.
    Other,
}

/// Classify `ch` against the alphabet and the annotation table.
pub fn classify<'a, A>(ch: char, table: &'a A) -> Symbol<'a>
where
    A: AnnotationTable + ?Sized,
{
    if let Some(rank) = alphabet::rank(ch) {
        return Symbol::Letter(rank);
    }
    if let Some(d) = ch.to_digit(10) {
        return Symbol::Digit(d as u8);
    }
    match ch {
        WILDCARD => Symbol::Wildcard,
        JOIN_PLUS => Symbol::Join(JoinPolarity::Plus),
        JOIN_MINUS => Symbol::Join(JoinPolarity::Minus),
        FRACTION_SLASH => Symbol::FractionSlash,
        VARIANT_MARKER => Symbol::VariantMarker,
        ':' | '⫶' | 'f' => Symbol::Silent,
        _ => match table.match_or_lookup(Lookup::Glyph(ch)) {
            Some(annotation) => Symbol::Annotation(annotation),
            None => Symbol::Other,
        },
    }
}

/// A value stored in a word-group of the reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Letter(u8),
    Number(i64),
    /// Unknown reading; sorts after every number.
    Wildcard,
    /// No numeric reading before a join; sorts before every number.
    Absent,
    Join(JoinPolarity),
    /// Raw code point of a sign-list tail character.
    Code(char),
}

impl Value {
    /// Collation weight within a word-group.
    pub fn weight(self) -> i64 {
        match self {
            Value::Letter(rank) => i64::from(rank),
            Value::Number(n) => n,
            Value::Wildcard => crate::key::MAX,
            Value::Absent => crate::key::ABSENT,
            Value::Join(polarity) => polarity.weight(),
            Value::Code(ch) => i64::from(u32::from(ch)),
        }
    }

    /// Whether this value is dropped from the alephless reading.
    pub fn is_aleph(self) -> bool {
        self == Value::Letter(ALEPH_RANK)
    }
}

/// One step of the segment stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Start a new word-group holding `Value`.
    Group(Value),
    /// Start a new, empty word-group.
    Open,
    /// Append to the current word-group, opening one if there is none.
    Append(Value),
    /// Extend the last weight of the current word-group by a digit.
    Extend(u8),
    /// A join directly followed by a letter; the reading sorts among the
    /// ligatures, after every non-ligature reading.
    Ligature,
    /// A fraction slash; the next digit run joins the current word-group.
    Fraction,
    VariantDigit(u8),
    Annotation(Annotation<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    ReadingNumeric,
    FractionSlash,
    ReadingAlphabetic,
    Variant,
}

/// Whether `input` is a sign-list reference rather than a reading.
pub fn is_list_mode<A>(input: &[char], table: &A) -> bool
where
    A: AnnotationTable + ?Sized,
{
    table.kind() == AnnotationKind::SignList && input.first() == Some(&WILDCARD)
}

/// Tokenize `input` into its segment stream.
pub fn segments<'a, A>(input: &[char], table: &'a A) -> Vec<Segment<'a>>
where
    A: AnnotationTable + ?Sized,
{
    if is_list_mode(input, table) {
        list_segments(input)
    } else {
        reading_segments(input, table)
    }
}

fn reading_segments<'a, A>(input: &[char], table: &'a A) -> Vec<Segment<'a>>
where
    A: AnnotationTable + ?Sized,
{
    let mut out = Vec::with_capacity(input.len() + 2);
    let mut category: Option<Category> = None;
    for (i, &ch) in input.iter().enumerate() {
        match classify(ch, table) {
            Symbol::Letter(rank) => {
                if category == Some(Category::ReadingAlphabetic) {
                    out.push(Segment::Append(Value::Letter(rank)));
                } else {
                    out.push(Segment::Group(Value::Letter(rank)));
                }
                category = Some(Category::ReadingAlphabetic);
            }
            Symbol::Digit(d) => match category {
                Some(Category::Variant) => out.push(Segment::VariantDigit(d)),
                Some(Category::ReadingNumeric) => out.push(Segment::Extend(d)),
                Some(Category::FractionSlash) => {
                    out.push(Segment::Append(Value::Number(i64::from(d))));
                    category = Some(Category::ReadingNumeric);
                }
                _ => {
                    out.push(Segment::Group(Value::Number(i64::from(d))));
                    category = Some(Category::ReadingNumeric);
                }
            },
            Symbol::Wildcard => {
                if category != Some(Category::Variant) {
                    out.push(Segment::Group(Value::Wildcard));
                    category = Some(Category::ReadingNumeric);
                }
            }
            Symbol::Join(polarity) => {
                if joins_letter(input, i + 1, table) {
                    out.push(Segment::Ligature);
                }
                if category != Some(Category::ReadingNumeric) {
                    out.push(Segment::Group(Value::Absent));
                }
                // Digits that follow extend the join weight.
                out.push(Segment::Append(Value::Join(polarity)));
                category = Some(Category::ReadingNumeric);
            }
            Symbol::FractionSlash => {
                out.push(Segment::Fraction);
                category = Some(Category::FractionSlash);
            }
            Symbol::VariantMarker => category = Some(Category::Variant),
            // Citations leave the category alone, so their position relative
            // to readings and variant digits does not matter.
            Symbol::Annotation(annotation) => out.push(Segment::Annotation(annotation)),
            Symbol::Silent | Symbol::Other => {}
        }
    }
    out
}

/// Whether the first non-citation character at or after `from` is a letter.
fn joins_letter<A>(input: &[char], from: usize, table: &A) -> bool
where
    A: AnnotationTable + ?Sized,
{
    input[from.min(input.len())..]
        .iter()
        .find(|&&ch| !matches!(classify(ch, table), Symbol::Annotation(_)))
        .is_some_and(|&ch| alphabet::is_letter(ch))
}

/// The parts of a list-mode composition, as character ranges into the full
/// input (which starts with the wildcard).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParts {
    /// Catalogue name: the non-digit run after the wildcard.
    pub name: Range<usize>,
    /// Entry number within the catalogue.
    pub number: Range<usize>,
    /// Everything between the number and the variant marker.
    pub tail: Range<usize>,
    /// Characters after the variant marker.
    pub variant: Range<usize>,
}

impl ListParts {
    pub fn split(input: &[char]) -> Self {
        let len = input.len();
        let start = 1.min(len);
        let run = |from: usize, pred: &dyn Fn(char) -> bool| {
            input[from..].iter().take_while(|&&c| pred(c)).count() + from
        };
        let name_end = run(start, &|c| !c.is_ascii_digit());
        let number_end = run(name_end, &|c| c.is_ascii_digit());
        let tail_end = run(number_end, &|c| c != VARIANT_MARKER);
        let variant_start = (tail_end + 1).min(len);
        Self {
            name: start..name_end,
            number: name_end..number_end,
            tail: number_end..tail_end,
            variant: variant_start..len,
        }
    }
}

fn list_segments<'a>(input: &[char]) -> Vec<Segment<'a>> {
    let parts = ListParts::split(input);
    let number = input[parts.number.clone()]
        .iter()
        .filter_map(|c| c.to_digit(10))
        .fold(0i64, |n, d| crate::key::extend_number(n, d as u8));

    let mut out = Vec::with_capacity(input.len() + 1);
    out.push(Segment::Group(Value::Number(number)));
    out.extend(
        input[parts.tail.clone()]
            .iter()
            .map(|&c| Segment::Append(Value::Code(c))),
    );
    // A full reading never holds an empty group, so this keeps a list reference
    // from sharing its key with the numeral it starts with.
    out.push(Segment::Open);
    out.extend(
        input[parts.variant.clone()]
            .iter()
            .filter_map(|c| c.to_digit(10))
            .map(|d| Segment::VariantDigit(d as u8)),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{CitationTable, SignListEntry, SignListTable, SourceEntry};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn lists() -> SignListTable {
        SignListTable::new(&[SignListEntry::new("abzl", "aBZL")]).unwrap()
    }

    fn sources() -> CitationTable {
        CitationTable::new(&[SourceEntry::new('M', Some("Borger"), "MesZL", 2004)]).unwrap()
    }

    #[test]
    fn test_reading_characters() {
        for ch in "a1/:⫶fx+-ʾ".chars() {
            assert!(is_reading_char(ch), "{ch}");
        }
        for ch in "vAM (".chars() {
            assert!(!is_reading_char(ch), "{ch}");
        }
    }

    #[test]
    fn test_letters_group_until_interrupted() {
        let table = lists();
        let segs = segments(&chars("an2ta"), &table);
        assert_eq!(
            segs,
            vec![
                Segment::Group(Value::Letter(0)),
                Segment::Append(Value::Letter(12)),
                Segment::Group(Value::Number(2)),
                Segment::Group(Value::Letter(20)),
                Segment::Append(Value::Letter(0)),
            ]
        );
    }

    #[test]
    fn test_digit_runs_extend() {
        let table = lists();
        let segs = segments(&chars("12"), &table);
        assert_eq!(
            segs,
            vec![Segment::Group(Value::Number(1)), Segment::Extend(2)]
        );
    }

    #[test]
    fn test_fraction_appends_to_current_group() {
        let table = lists();
        let segs = segments(&chars("1/4"), &table);
        assert_eq!(
            segs,
            vec![
                Segment::Group(Value::Number(1)),
                Segment::Fraction,
                Segment::Append(Value::Number(4)),
            ]
        );
    }

    #[test]
    fn test_join_after_letters_pushes_absent_reading() {
        let table = lists();
        let segs = segments(&chars("d+utu"), &table);
        assert_eq!(
            &segs[..4],
            &[
                Segment::Group(Value::Letter(2)),
                Segment::Ligature,
                Segment::Group(Value::Absent),
                Segment::Append(Value::Join(JoinPolarity::Plus)),
            ]
        );
    }

    #[test]
    fn test_join_after_number_appends() {
        let table = lists();
        let segs = segments(&chars("2-"), &table);
        assert_eq!(
            segs,
            vec![
                Segment::Group(Value::Number(2)),
                Segment::Append(Value::Join(JoinPolarity::Minus)),
            ]
        );
    }

    #[test]
    fn test_digits_after_join_extend_its_weight() {
        let table = lists();
        let segs = segments(&chars("an-5"), &table);
        assert_eq!(
            &segs[2..],
            &[
                Segment::Group(Value::Absent),
                Segment::Append(Value::Join(JoinPolarity::Minus)),
                Segment::Extend(5),
            ]
        );
    }

    #[test]
    fn test_variant_digits_leave_reading() {
        let table = lists();
        let segs = segments(&chars("lu2v13"), &table);
        assert_eq!(
            &segs[3..],
            &[Segment::VariantDigit(1), Segment::VariantDigit(3)]
        );
    }

    #[test]
    fn test_wildcard_ignored_in_variant_context() {
        let table = lists();
        let segs = segments(&chars("ḫix"), &table);
        assert_eq!(segs.last(), Some(&Segment::Group(Value::Wildcard)));
        let table = lists();
        let segs = segments(&chars("ḫivx"), &table);
        assert!(!segs.contains(&Segment::Group(Value::Wildcard)));
    }

    #[test]
    fn test_citation_glyph_is_transparent() {
        let table = sources();
        let plain = segments(&chars("an2v3"), &table);
        let cited = segments(&chars("an2Mv3"), &table);
        let without: Vec<_> = cited
            .iter()
            .copied()
            .filter(|s| !matches!(s, Segment::Annotation(_)))
            .collect();
        assert_eq!(plain, without);
        assert_eq!(cited.len(), plain.len() + 1);
    }

    #[test]
    fn test_ligature_lookahead_skips_citations() {
        let table = sources();
        let segs = segments(&chars("ka+Mli"), &table);
        assert!(segs.contains(&Segment::Ligature));
    }

    #[test]
    fn test_list_parts() {
        let input = chars("xabzl12av3");
        let parts = ListParts::split(&input);
        assert_eq!(parts.name, 1..5);
        assert_eq!(parts.number, 5..7);
        assert_eq!(parts.tail, 7..8);
        assert_eq!(parts.variant, 9..10);
    }

    #[test]
    fn test_list_parts_without_number() {
        let input = chars("xmzl");
        let parts = ListParts::split(&input);
        assert_eq!(parts.name, 1..4);
        assert!(parts.number.is_empty());
        assert!(parts.tail.is_empty());
        assert!(parts.variant.is_empty());

        let parts = ListParts::split(&chars("x"));
        assert!(parts.name.is_empty());
    }

    #[test]
    fn test_list_segments() {
        let table = lists();
        let segs = segments(&chars("xabzl12av3"), &table);
        assert_eq!(
            segs,
            vec![
                Segment::Group(Value::Number(12)),
                Segment::Append(Value::Code('a')),
                Segment::Open,
                Segment::VariantDigit(3),
            ]
        );
    }

    #[test]
    fn test_list_segments_end_with_empty_group() {
        let table = lists();
        let segs = segments(&chars("xmzl839"), &table);
        assert_eq!(
            segs,
            vec![Segment::Group(Value::Number(839)), Segment::Open]
        );
    }

    #[test]
    fn test_leading_wildcard_is_a_reading_without_sign_lists() {
        let table = sources();
        let segs = segments(&chars("xabzl1"), &table);
        assert_eq!(segs[0], Segment::Group(Value::Wildcard));
    }

    #[test]
    fn test_aleph_value() {
        assert!(Value::Letter(ALEPH_RANK).is_aleph());
        assert!(!Value::Number(i64::from(ALEPH_RANK)).is_aleph());
    }
}
