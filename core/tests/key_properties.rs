//! Property tests for ordering keys built directly through the core engine.

use std::cmp::Ordering;

use libcuneiform_core::alphabet::ALPHABET;
use libcuneiform_core::{Config, Engine, SignListEntry, SignListTable, WordGroup};
use proptest::prelude::*;

fn engine() -> Engine<SignListTable> {
    let table = SignListTable::new(&[
        SignListEntry::new("abzl", "aBZL"),
        SignListEntry::new("mzl", "MZL"),
    ])
    .unwrap();
    Engine::new(Config::default(), table)
}

fn arb_reading() -> impl Strategy<Value = String> {
    let mut chars = ALPHABET.to_vec();
    chars.extend("0123456789/:fx+-v".chars());
    prop::collection::vec(prop::sample::select(chars), 1..10)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .prop_filter("list-mode compositions are not readings", |s| {
            !s.starts_with('x')
        })
}

fn arb_list_reference() -> impl Strategy<Value = String> {
    let name = prop::sample::select(vec!["", "abzl", "mzl", "lak"]);
    let number = prop::option::of(0u32..2000);
    let tail = prop::collection::vec(prop::sample::select(vec!['a', 'b', 'š', 'ʾ']), 0..3);
    let variant = prop::option::of(0u32..20);
    (name, number, tail, variant).prop_map(|(name, number, tail, variant)| {
        let mut s = format!("x{name}");
        if let Some(n) = number {
            s.push_str(&n.to_string());
        }
        s.extend(tail);
        if let Some(v) = variant {
            s.push_str(&format!("v{v}"));
        }
        s
    })
}

proptest! {
    /// A sign-list reference never shares its key with a reading.
    #[test]
    fn prop_list_reference_never_equals_reading(
        list in arb_list_reference(),
        reading in arb_reading(),
    ) {
        let engine = engine();
        prop_assert_ne!(engine.ordering_key(&list), engine.ordering_key(&reading));
        prop_assert_ne!(engine.compare(&list, &reading), Ordering::Equal);
    }

    /// Digits typed after a join extend the join's weight.
    #[test]
    fn prop_digits_after_join_extend_weight(plus in any::<bool>(), n in 0u32..100_000) {
        let engine = engine();
        let digits = n.to_string();
        let (join, weight) = if plus { ('+', 1i64) } else { ('-', 0i64) };
        let key = engine.ordering_key(&format!("an{join}{digits}"));
        let expected = weight * 10i64.pow(digits.len() as u32) + i64::from(n);
        prop_assert_eq!(key.reading().groups()[1].weights(), &[-1, expected][..]);
    }

    /// Sorting never leaves a pair out of order.
    #[test]
    fn prop_sorted_inputs_pairwise_ordered(
        inputs in prop::collection::vec(
            prop_oneof![arb_reading(), arb_list_reference()],
            2..8,
        )
    ) {
        let engine = engine();
        let mut sorted = inputs.clone();
        sorted.sort_by(|a, b| engine.compare(a, b));
        for (i, a) in sorted.iter().enumerate() {
            for b in &sorted[i + 1..] {
                prop_assert_ne!(engine.compare(a, b), Ordering::Greater);
            }
        }
    }

    /// A strict prefix of a word-group sorts before it.
    #[test]
    fn prop_word_group_prefix_sorts_first(
        head in prop::collection::vec(-1i64..100, 0..5),
        rest in prop::collection::vec(-1i64..100, 1..5),
    ) {
        let mut longer = head.clone();
        longer.extend(&rest);
        prop_assert!(WordGroup::new(head) < WordGroup::new(longer));
    }
}
