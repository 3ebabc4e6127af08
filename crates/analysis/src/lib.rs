//! String analysis layer.
//!
//! Turns a raw input string into the descriptive properties the service
//! stores alongside it, and computes the content hash that serves as the
//! string's identity.
//!
//! ## What we compute
//!
//! - `length`: character count of the untouched input
//! - `is_palindrome`: word-order reversal check (see [`analyze`] for the exact rule)
//! - `unique_characters`: distinct characters, lowercased, whitespace removed
//! - `word_count`: whitespace-delimited tokens of the trimmed input
//! - `sha256_hash`: same digest as [`identity_of`]
//! - `character_frequency_map`: per-character counts in first-seen order
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. The same input yields the
//! same [`StringProperties`] on any machine.

mod analyze;
mod hash;
mod properties;
mod whitespace;

pub use crate::analyze::analyze;
pub use crate::hash::identity_of;
pub use crate::properties::{CharacterFrequencyMap, StringProperties};
pub use crate::whitespace::{count_words, is_blank, is_whitespace, strip_whitespace};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_hash_matches_identity() {
        let props = analyze("Never odd or even");
        assert_eq!(props.sha256_hash, identity_of("Never odd or even"));
    }

    #[test]
    fn serialized_field_names_are_stable() {
        let props = analyze("ab ba");
        let json = serde_json::to_value(&props).expect("serialize");
        let obj = json.as_object().expect("object");

        for key in [
            "length",
            "is_palindrome",
            "unique_characters",
            "word_count",
            "sha256_hash",
            "character_frequency_map",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj.len(), 6);
    }
}
