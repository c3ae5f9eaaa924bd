//! Transliteration alphabet and collation ranks.
//!
//! Readings are collated by the traditional order of the Assyriological
//! alphabet rather than by code point, so that `ḫ` sorts right after `ŋ` and
//! the aleph `ʾ` comes last.

use phf::phf_map;

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// The alphabet letters in collation order.
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'a', 'b', 'd', 'e', 'g', 'ŋ', 'ḫ', 'i', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 'ṣ', 'š',
    'ś', 't', 'ṭ', 'u', 'w', 'z', 'ʾ',
];

/// The aleph letter, dropped from the primary collation level.
pub const ALEPH: char = 'ʾ';

/// Rank of [`ALEPH`].
pub const ALEPH_RANK: u8 = 25;

/// Vowels counted when deciding whether a homophone index becomes an accent.
pub const VOWELS: [char; 4] = ['a', 'e', 'i', 'u'];

static RANKS: phf::Map<char, u8> = phf_map! {
    'a' => 0, 'b' => 1, 'd' => 2, 'e' => 3, 'g' => 4, 'ŋ' => 5, 'ḫ' => 6,
    'i' => 7, 'j' => 8, 'k' => 9, 'l' => 10, 'm' => 11, 'n' => 12, 'p' => 13,
    'q' => 14, 'r' => 15, 's' => 16, 'ṣ' => 17, 'š' => 18, 'ś' => 19, 't' => 20,
    'ṭ' => 21, 'u' => 22, 'w' => 23, 'z' => 24, 'ʾ' => 25,
};

/// Collation rank of `ch`, or `None` if it is not an alphabet letter.
#[inline]
pub fn rank(ch: char) -> Option<u8> {
    RANKS.get(&ch).copied()
}

/// Whether `ch` is one of the alphabet letters.
#[inline]
pub fn is_letter(ch: char) -> bool {
    RANKS.contains_key(&ch)
}

/// Whether `ch` is counted as a vowel for accent placement.
#[inline]
pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}
