//! Whitespace helpers shared by the analyzer and the request validators.
//!
//! Whitespace is Unicode `White_Space` minus U+0085 (NEXT LINE), plus
//! U+FEFF (ZERO WIDTH NO-BREAK SPACE). Blank detection, word counts and the
//! compacted form used for character statistics all use this one set.
//!
//! # Examples
//!
//! ```rust
//! use analysis::{count_words, is_blank, strip_whitespace};
//!
//! assert_eq!(strip_whitespace(" a b\tc\n"), "abc");
//! assert_eq!(count_words("  hello   world  "), 2);
//! assert!(is_blank("\u{FEFF} \t"));
//! assert!(!is_blank("\u{0085}"));
//! ```

const NEXT_LINE: char = '\u{0085}';
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Whether `c` belongs to the whitespace set described in the module docs.
pub fn is_whitespace(c: char) -> bool {
    c == BYTE_ORDER_MARK || (c != NEXT_LINE && c.is_whitespace())
}

/// True when `text` is empty or whitespace-only.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_whitespace)
}

/// Remove every whitespace character, keeping the rest in order.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|&c| !is_whitespace(c)).collect()
}

/// Count the non-empty tokens of `text`, splitting on runs of whitespace.
/// Whitespace-only input has zero words.
pub fn count_words(text: &str) -> usize {
    text.split(is_whitespace)
        .filter(|token| !token.is_empty())
        .count()
}
