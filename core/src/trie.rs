/// Prefix trie used for sign-list catalogue lookup.
use ahash::AHashMap;

/// A character trie mapping keys to values.
///
/// Used by the sign-list table to find the catalogue whose prefix is the
/// longest prefix of a list-mode composition.
///
/// # Example
/// ```
/// use libcuneiform_core::trie::PrefixTrie;
///
/// let mut trie = PrefixTrie::new();
/// trie.insert("mzl", "MZL");
/// trie.insert("mea", "MÉA");
///
/// let input: Vec<char> = "mzl839".chars().collect();
/// assert_eq!(trie.longest_prefix(&input), Some((3, &"MZL")));
/// ```
#[derive(Debug)]
pub struct PrefixTrie<V> {
    children: AHashMap<char, Box<PrefixTrie<V>>>,
    value: Option<V>,
}

impl<V> Default for PrefixTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PrefixTrie<V> {
    /// Create a new empty trie root.
    pub fn new() -> Self {
        Self {
            children: AHashMap::new(),
            value: None,
        }
    }

    /// Insert `key`, returning the value it previously held, if any.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        let mut node = self;
        for ch in key.chars() {
            node = node
                .children
                .entry(ch)
                .or_insert_with(|| Box::new(PrefixTrie::new()));
        }
        node.value.replace(value)
    }

    /// Longest key that is a prefix of `input`.
    ///
    /// Returns the key length in characters together with its value.
    pub fn longest_prefix(&self, input: &[char]) -> Option<(usize, &V)> {
        let mut best = None;
        let mut node = self;
        for (idx, ch) in input.iter().enumerate() {
            match node.children.get(ch) {
                Some(child) => {
                    node = child;
                    if let Some(value) = &node.value {
                        best = Some((idx + 1, value));
                    }
                }
                None => break,
            }
        }
        best
    }
}
