//! Property types produced by the analyzer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-character occurrence counts. Keys keep the order in which each
/// character was first seen, so the serialized JSON object is stable.
pub type CharacterFrequencyMap = IndexMap<String, usize>;

/// Descriptive properties of a string, computed once when the string is
/// stored and never recomputed on read.
///
/// Field names are part of the wire and storage format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Number of characters in the raw input (no trimming, no lowercasing).
    pub length: usize,
    /// Result of the word-reversal palindrome check. See [`crate::analyze`].
    pub is_palindrome: bool,
    /// Distinct characters in the lowercased input with whitespace removed.
    pub unique_characters: usize,
    /// Whitespace-delimited tokens in the trimmed input.
    pub word_count: usize,
    /// Lowercase hex SHA-256 of the raw input; equal to the record id.
    pub sha256_hash: String,
    /// Occurrence counts over the lowercased input with whitespace removed.
    pub character_frequency_map: CharacterFrequencyMap,
}
