//! The analyzer: raw string in, [`StringProperties`] out.

use std::collections::HashSet;

use crate::hash::identity_of;
use crate::properties::{CharacterFrequencyMap, StringProperties};
use crate::whitespace::{count_words, strip_whitespace};

/// Derive the descriptive properties of `value`.
///
/// Total function: every string, including the empty one, has properties.
///
/// # Palindrome rule
///
/// `is_palindrome` does **not** test character-level symmetry. The input is
/// lowercased, split on single U+0020 spaces, the tokens are reversed and
/// re-joined with commas, and the result is compared with the lowercased
/// input. A single-word input therefore always reports `true`, and any input
/// containing a space almost always reports `false`. Stored records and
/// existing clients depend on this exact behavior.
///
/// ```rust
/// use analysis::analyze;
///
/// assert!(analyze("racecar").is_palindrome);
/// assert!(!analyze("race car").is_palindrome);
/// assert_eq!(analyze("hello world").word_count, 2);
/// assert_eq!(analyze("AAbb").unique_characters, 2);
/// ```
pub fn analyze(value: &str) -> StringProperties {
    let cleaned = value.to_lowercase();
    let reversed = reverse_words(&cleaned);
    let compact = strip_whitespace(&cleaned);

    StringProperties {
        length: value.chars().count(),
        is_palindrome: cleaned == reversed,
        unique_characters: compact.chars().collect::<HashSet<char>>().len(),
        word_count: count_words(value),
        sha256_hash: identity_of(value),
        character_frequency_map: frequency_map(&compact),
    }
}

/// Reverse the order of space-separated tokens and join them with commas.
fn reverse_words(cleaned: &str) -> String {
    let mut tokens: Vec<&str> = cleaned.split(' ').collect();
    tokens.reverse();
    tokens.join(",")
}

fn frequency_map(compact: &str) -> CharacterFrequencyMap {
    let mut map = CharacterFrequencyMap::new();
    for ch in compact.chars() {
        *map.entry(ch.to_string()).or_insert(0) += 1;
    }
    map
}
