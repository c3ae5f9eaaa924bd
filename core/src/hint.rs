//! Pretty transcription hints.
//!
//! The hint shows a candidate's composition the way it would be written in a
//! transliteration: homophone indices as subscripts (`lugal₂`), or as accents
//! on single-vowel readings (`a\u{301}n₂`), determinatives as superscripts
//! (`ᵈutu`), and annotations spelled out in a parenthetical
//! (`an (Borger ABZ, variant 2)`). A caret marks where the user's input ends;
//! it follows source characters, not output characters, so it stays put
//! while substitutions change the output length.

use crate::alphabet::{is_letter, is_vowel};
use crate::annotation::{Annotation, AnnotationTable, Lookup};
use crate::composition::CompositionInput;
use crate::segment::{
    classify, is_list_mode, is_reading_char, JoinPolarity, ListParts, Symbol, VARIANT_MARKER,
};
use crate::Config;

/// The default caret marker, U+2038.
pub const CARET: char = '\u{2038}';

const ACUTE: char = '\u{301}';
const GRAVE: char = '\u{300}';

/// Render the hint for `input`.
pub fn render<A>(input: &CompositionInput, config: &Config, table: &A) -> String
where
    A: AnnotationTable + ?Sized,
{
    if is_list_mode(input.chars(), table) {
        render_list(input, config, table)
    } else {
        render_reading(input, config, table)
    }
}

struct Writer {
    out: String,
    caret: char,
    entered_size: usize,
    /// Whether the next parenthetical item needs a `", "` before it.
    pending_item: bool,
}

impl Writer {
    fn new(config: &Config, input: &CompositionInput) -> Self {
        Self {
            out: String::with_capacity(input.len() * 3 + 8),
            caret: config.caret_marker,
            entered_size: input.entered_size(),
            pending_item: false,
        }
    }

    fn caret_at(&mut self, i: usize) {
        if i == self.entered_size {
            self.out.push(self.caret);
        }
    }

    fn push(&mut self, ch: char) {
        self.out.push(ch);
    }

    fn push_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn begin_item(&mut self) {
        if self.pending_item {
            self.out.push_str(", ");
        }
        self.pending_item = true;
    }

    fn finish(mut self, len: usize, in_parenthetical: bool) -> String {
        if in_parenthetical {
            self.out.push(')');
        }
        if self.entered_size == len {
            self.out.push(self.caret);
        }
        self.out
    }
}

/// What the reading says about accent placement.
#[derive(Debug, Default)]
struct Homophone {
    vowels: usize,
    index: u32,
    entered: bool,
}

impl Homophone {
    fn scan(chars: &[char], entered_size: usize) -> Self {
        let mut h = Homophone {
            entered: true,
            ..Default::default()
        };
        for (i, &ch) in chars.iter().enumerate() {
            if !is_reading_char(ch) {
                break;
            }
            // Skip leading numbers to get to the unit, if any.
            if h.vowels == 0 && !is_letter(ch) {
                continue;
            }
            if let Some(d) = ch.to_digit(10) {
                if entered_size <= i {
                    h.entered = false;
                }
                h.index = h.index.saturating_mul(10).saturating_add(d);
            }
            if is_vowel(ch) {
                h.vowels += 1;
            }
        }
        h
    }

    fn accent(&self) -> Option<char> {
        if !self.entered || self.vowels != 1 {
            return None;
        }
        match self.index {
            2 => Some(ACUTE),
            3 => Some(GRAVE),
            _ => None,
        }
    }
}

fn subscript(ch: char) -> char {
    match ch.to_digit(10) {
        Some(d) => char::from_u32(0x2080 + d).unwrap_or(ch),
        None => 'ₓ',
    }
}

fn render_reading<A>(input: &CompositionInput, config: &Config, table: &A) -> String
where
    A: AnnotationTable + ?Sized,
{
    let chars = input.chars();
    let reading_len = chars
        .iter()
        .position(|&c| !is_reading_char(c))
        .unwrap_or(chars.len());
    let reading = &chars[..reading_len];
    let accent = if config.homophone_accents {
        Homophone::scan(chars, input.entered_size()).accent()
    } else {
        None
    };
    let shorthand = match reading {
        ['d'] => Some('ᵈ'),
        ['f'] => Some('ᶠ'),
        ['m'] => Some('ᵐ'),
        _ => None,
    };
    let determinative = matches!(reading, ['d', next, ..] if !is_letter(*next));

    let mut w = Writer::new(config, input);
    let mut in_parenthetical = false;
    let mut after_letters = false;
    let mut run_entered = false;
    for (i, &ch) in chars.iter().enumerate() {
        if !in_parenthetical && i >= reading_len {
            w.push_str(" (");
            in_parenthetical = true;
        }
        match classify(ch, table) {
            Symbol::VariantMarker => {
                w.begin_item();
                w.caret_at(i);
                w.push_str(&config.variant_label);
                w.push(' ');
            }
            Symbol::Annotation(annotation) => {
                w.begin_item();
                let text = table.render_annotation(&annotation, 0);
                w.push_str(text.lead);
                w.caret_at(i);
                w.push_str(text.body);
            }
            Symbol::Digit(_) | Symbol::Wildcard => {
                let starts_run = ch == 'x' || i == 0 || !chars[i - 1].is_ascii_digit();
                if starts_run {
                    let run = chars[i..]
                        .iter()
                        .take_while(|c| c.is_ascii_digit())
                        .count()
                        .max(1);
                    run_entered = i + run <= input.entered_size();
                }
                w.caret_at(i);
                if in_parenthetical || !after_letters || !run_entered {
                    w.push(ch);
                } else {
                    w.push(subscript(ch));
                }
            }
            Symbol::Join(polarity) => {
                w.caret_at(i);
                if determinative && i == 1 {
                    // Shown by the determinative itself.
                } else if polarity == JoinPolarity::Plus
                    && chars.get(i + 1).is_some_and(|&c| is_letter(c))
                {
                    w.push('+');
                } else {
                    w.push(match polarity {
                        JoinPolarity::Plus => '⁺',
                        JoinPolarity::Minus => '⁻',
                    });
                }
            }
            Symbol::Letter(_) => {
                after_letters = true;
                w.caret_at(i);
                match (i, shorthand) {
                    (0, Some(sup)) => w.push(sup),
                    (0, None) if determinative => w.push('ᵈ'),
                    _ => w.push(ch),
                }
                if let Some(accent) = accent.filter(|_| !in_parenthetical && is_vowel(ch)) {
                    w.push(accent);
                }
            }
            Symbol::Silent => {
                w.caret_at(i);
                match (i, shorthand) {
                    (0, Some(sup)) => w.push(sup),
                    _ => w.push(ch),
                }
            }
            Symbol::FractionSlash | Symbol::Other => {
                w.caret_at(i);
                w.push(ch);
            }
        }
    }
    w.finish(chars.len(), in_parenthetical)
}

fn render_list<A>(input: &CompositionInput, config: &Config, table: &A) -> String
where
    A: AnnotationTable + ?Sized,
{
    let chars = input.chars();
    let parts = ListParts::split(chars);
    let matched = table.match_or_lookup(Lookup::ListName(&chars[parts.name]));
    let prefix_len = match matched {
        Some(Annotation::SignList { prefix_len, .. }) => prefix_len,
        _ => 0,
    };

    let mut w = Writer::new(config, input);
    let mut in_parenthetical = false;
    // The wildcard introducing the list is not displayed.
    w.caret_at(0);
    for (i, &ch) in chars.iter().enumerate().skip(1) {
        let offset = i - 1;
        if prefix_len > 0 && offset == prefix_len {
            w.push(' ');
        }
        if let Some(annotation) = matched.filter(|_| offset < prefix_len) {
            w.caret_at(i);
            w.push_str(table.render_annotation(&annotation, offset).body);
        } else if ch == VARIANT_MARKER && !in_parenthetical {
            w.push_str(" (");
            in_parenthetical = true;
            w.caret_at(i);
            w.push_str(&config.variant_label);
            w.push(' ');
        } else {
            w.caret_at(i);
            // Outside the catalogue name `š` is written `c`.
            w.push(if ch == 'š' { 'c' } else { ch });
        }
    }
    w.finish(chars.len(), in_parenthetical)
}

/// Undo the character-level decorations of a hint: the caret, accents,
/// subscripts and superscripts. Parentheticals are left in place.
///
/// Accents are removed as the standalone combining marks the renderer emits;
/// letters that carry their own diacritic, like `ś`, are kept.
pub fn skeleton(hint: &str, caret: char) -> String {
    hint.chars()
        .filter(|&c| c != caret && c != ACUTE && c != GRAVE)
        .map(|c| match c {
            '₀'..='₉' => char::from_u32(u32::from(c) - 0x2080 + u32::from('0')).unwrap_or(c),
            'ₓ' => 'x',
            'ᵈ' => 'd',
            'ᶠ' => 'f',
            'ᵐ' => 'm',
            '⁺' => '+',
            '⁻' => '-',
            c => c,
        })
        .collect()
}
