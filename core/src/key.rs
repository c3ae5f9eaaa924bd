//! Ordering keys for composition inputs.
//!
//! A key compares on four levels: the reading with alephs removed, the full
//! reading, the cited source (most recent first), and the variant number.
//! Readings are sequences of word-groups, and word-groups sequences of
//! weights; both compare element-wise with a strict prefix sorting first.
//!
//! Fractions are kept in a single word-group `{numerator, denominator}` so
//! that they sort after their numerator and by increasing denominator:
//!
//! ```text
//! {{1}} < {{1}, iku} < {{1, 2}} < {{1, 2}, iku} < {{1, 4}} < {{1, 4}, iku} < {{2}}
//! ```

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::annotation::AnnotationTable;
use crate::segment::{Segment, Value};

/// Weight of an unknown or ligature reading.
pub const MAX: i64 = i64::MAX;
/// Weight of a missing numeric reading before a join.
pub const ABSENT: i64 = -1;

/// Append a decimal digit to `n`. Saturates below [`MAX`], so that numbers
/// always sort before the wildcard.
pub fn extend_number(n: i64, digit: u8) -> i64 {
    n.saturating_mul(10)
        .saturating_add(i64::from(digit))
        .min(MAX - 1)
}

/// One word of a reading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct WordGroup(Vec<i64>);

impl WordGroup {
    pub fn new(weights: Vec<i64>) -> Self {
        Self(weights)
    }

    pub fn weights(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Ord for WordGroup {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().zip(&other.0) {
            match a.cmp(b) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        self.0.len().cmp(&other.0.len())
    }
}

impl PartialOrd for WordGroup {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A sequence of word-groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Reading(Vec<WordGroup>);

impl Reading {
    pub fn new(groups: Vec<WordGroup>) -> Self {
        Self(groups)
    }

    pub fn groups(&self) -> &[WordGroup] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Ord for Reading {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().zip(&other.0) {
            match a.cmp(b) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        self.0.len().cmp(&other.0.len())
    }
}

impl PartialOrd for Reading {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> From<[&[i64]; N]> for Reading {
    fn from(groups: [&[i64]; N]) -> Self {
        Self(groups.iter().map(|g| WordGroup(g.to_vec())).collect())
    }
}

/// The source level of a key.
///
/// Uncited readings sort before every cited one; cited readings sort by
/// decreasing publication year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum SourceOrder {
    #[default]
    Uncited,
    /// Negated publication year.
    Cited(i32),
}

impl SourceOrder {
    pub fn cited(year: i32) -> Self {
        SourceOrder::Cited(year.saturating_neg())
    }
}

impl Ord for SourceOrder {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SourceOrder::Uncited, SourceOrder::Uncited) => Ordering::Equal,
            (SourceOrder::Uncited, SourceOrder::Cited(_)) => Ordering::Less,
            (SourceOrder::Cited(_), SourceOrder::Uncited) => Ordering::Greater,
            (SourceOrder::Cited(a), SourceOrder::Cited(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for SourceOrder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Total ordering key of a composition input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct OrderingKey {
    alephless_reading: Reading,
    reading: Reading,
    source_order: SourceOrder,
    variant: u32,
}

impl OrderingKey {
    /// Fold a segment stream into a key.
    pub fn build<A>(segments: &[Segment<'_>], table: &A) -> Self
    where
        A: AnnotationTable + ?Sized,
    {
        let mut builder = KeyBuilder::default();
        for segment in segments {
            match *segment {
                Segment::Group(value) => builder.open(value),
                Segment::Open => {
                    builder.reading.push(WordGroup::default());
                    builder.alephless.push(WordGroup::default());
                }
                Segment::Append(value) => builder.append(value),
                Segment::Extend(digit) => builder.extend(digit),
                Segment::Ligature => builder.ligatures += 1,
                Segment::Fraction => {}
                Segment::VariantDigit(digit) => {
                    builder.variant = builder
                        .variant
                        .saturating_mul(10)
                        .saturating_add(u32::from(digit));
                }
                Segment::Annotation(ref annotation) => {
                    if let Some(order) = table.sort_key_contribution(annotation) {
                        builder.source_order = order;
                    }
                }
            }
        }
        builder.finish()
    }

    pub fn alephless_reading(&self) -> &Reading {
        &self.alephless_reading
    }

    pub fn reading(&self) -> &Reading {
        &self.reading
    }

    pub fn source_order(&self) -> SourceOrder {
        self.source_order
    }

    pub fn variant(&self) -> u32 {
        self.variant
    }
}

impl Ord for OrderingKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.alephless_reading
            .cmp(&other.alephless_reading)
            .then_with(|| self.reading.cmp(&other.reading))
            .then_with(|| self.source_order.cmp(&other.source_order))
            .then_with(|| self.variant.cmp(&other.variant))
    }
}

impl PartialOrd for OrderingKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for OrderingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn reading(f: &mut fmt::Formatter<'_>, r: &Reading) -> fmt::Result {
            f.write_str("{")?;
            for (i, group) in r.groups().iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                f.write_str("{")?;
                for (j, w) in group.weights().iter().enumerate() {
                    if j > 0 {
                        f.write_str(", ")?;
                    }
                    match *w {
                        MAX => f.write_str("MAX")?,
                        w => write!(f, "{w}")?,
                    }
                }
                f.write_str("}")?;
            }
            f.write_str("}")
        }
        f.write_str("(")?;
        reading(f, &self.alephless_reading)?;
        f.write_str(", ")?;
        reading(f, &self.reading)?;
        match self.source_order {
            SourceOrder::Uncited => f.write_str(", uncited")?,
            SourceOrder::Cited(order) => write!(f, ", {order}")?,
        }
        write!(f, ", v{})", self.variant)
    }
}

#[derive(Default)]
struct KeyBuilder {
    reading: Vec<WordGroup>,
    alephless: Vec<WordGroup>,
    ligatures: usize,
    source_order: SourceOrder,
    variant: u32,
}

impl KeyBuilder {
    fn open(&mut self, value: Value) {
        self.reading.push(WordGroup::default());
        self.alephless.push(WordGroup::default());
        self.push(value);
    }

    fn append(&mut self, value: Value) {
        if self.reading.is_empty() {
            self.open(value);
        } else {
            self.push(value);
        }
    }

    fn push(&mut self, value: Value) {
        let weight = value.weight();
        if let Some(group) = self.reading.last_mut() {
            group.0.push(weight);
        }
        if !value.is_aleph() {
            if let Some(group) = self.alephless.last_mut() {
                group.0.push(weight);
            }
        }
    }

    fn extend(&mut self, digit: u8) {
        for groups in [&mut self.reading, &mut self.alephless] {
            if let Some(last) = groups.last_mut().and_then(|g| g.0.last_mut()) {
                if *last != MAX {
                    *last = extend_number(*last, digit);
                }
            }
        }
    }

    fn finish(mut self) -> OrderingKey {
        if self.ligatures > 0 {
            let mut reading = vec![WordGroup(vec![MAX]); self.ligatures];
            let mut alephless = reading.clone();
            reading.append(&mut self.reading);
            alephless.append(&mut self.alephless);
            self.reading = reading;
            self.alephless = alephless;
        }
        OrderingKey {
            alephless_reading: Reading(self.alephless),
            reading: Reading(self.reading),
            source_order: self.source_order,
            variant: self.variant,
        }
    }
}
