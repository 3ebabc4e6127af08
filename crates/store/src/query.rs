//! Filter queries over the stored collection.
//!
//! Filters arrive as raw `name=value` pairs. [`StringFilters::from_params`]
//! turns the recognized ones into typed constraints; every present filter
//! must hold for a record to match (logical AND). Absent or empty
//! parameters impose no constraint.
//!
//! | Parameter            | Constraint                                                  |
//! |----------------------|-------------------------------------------------------------|
//! | `is_palindrome`      | `properties.is_palindrome == (value == "true")`             |
//! | `min_length`         | `properties.length >= n`                                    |
//! | `max_length`         | `properties.length <= n`                                    |
//! | `word_count`         | `properties.word_count == n`                                |
//! | `contains_character` | lowercased `value` contains the lowercased parameter        |
//!
//! Numeric parameters never fail. They are read leniently: leading
//! whitespace, an optional sign, then the leading run of digits (`"3abc"` is
//! 3, `"-1"` is -1). A parameter with no leading digits is [`Count::NaN`],
//! which no record satisfies.

use crate::{StoreError, StringRecord, StringRepository};
use indexmap::IndexMap;

/// Raw query parameters exactly as the caller sent them, in arrival order.
/// Unknown keys are kept so they can be echoed back.
pub type FilterApplied = IndexMap<String, String>;

/// Argument of a numeric filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    Int(i64),
    /// No leading digits. Every comparison against it is false.
    NaN,
}

impl Count {
    /// Read `raw` the lenient way described in the module docs. Digits past
    /// the `i64` range saturate.
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim_start_matches(analysis::is_whitespace);
        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        let (radix, body) = match unsigned.get(..2) {
            Some("0x") | Some("0X") => (16, &unsigned[2..]),
            _ => (10, unsigned),
        };
        let end = body
            .find(|c: char| !c.is_digit(radix))
            .unwrap_or(body.len());
        let digits = &body[..end];
        if digits.is_empty() {
            return Count::NaN;
        }

        let magnitude = digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0i64, |acc, d| {
                acc.saturating_mul(i64::from(radix))
                    .saturating_add(i64::from(d))
            });
        Count::Int(if negative { -magnitude } else { magnitude })
    }

    fn holds(self, actual: usize, cmp: fn(&i64, &i64) -> bool) -> bool {
        match self {
            Count::Int(n) => cmp(&i64::try_from(actual).unwrap_or(i64::MAX), &n),
            Count::NaN => false,
        }
    }
}

impl From<usize> for Count {
    fn from(n: usize) -> Self {
        Count::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

/// Typed filter set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringFilters {
    pub is_palindrome: Option<bool>,
    pub min_length: Option<Count>,
    pub max_length: Option<Count>,
    pub word_count: Option<Count>,
    pub contains_character: Option<String>,
}

impl StringFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the recognized filters out of raw query parameters.
    ///
    /// `is_palindrome` is true only for the literal `"true"`; any other
    /// non-empty value means false. Unknown parameters are ignored.
    pub fn from_params(params: &FilterApplied) -> Self {
        let get = |name: &str| {
            params
                .get(name)
                .map(String::as_str)
                .filter(|value| !value.is_empty())
        };

        Self {
            is_palindrome: get("is_palindrome").map(|value| value == "true"),
            min_length: get("min_length").map(Count::parse),
            max_length: get("max_length").map(Count::parse),
            word_count: get("word_count").map(Count::parse),
            contains_character: get("contains_character").map(str::to_string),
        }
    }

    pub fn with_is_palindrome(mut self, is_palindrome: bool) -> Self {
        self.is_palindrome = Some(is_palindrome);
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length.into());
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length.into());
        self
    }

    pub fn with_word_count(mut self, word_count: usize) -> Self {
        self.word_count = Some(word_count.into());
        self
    }

    pub fn with_contains_character<S: Into<String>>(mut self, needle: S) -> Self {
        self.contains_character = Some(needle.into());
        self
    }

    /// True when no constraint is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Evaluate every present filter against `record`.
    pub fn matches(&self, record: &StringRecord) -> bool {
        let props = &record.properties;

        self.is_palindrome
            .map_or(true, |want| props.is_palindrome == want)
            && self
                .min_length
                .map_or(true, |min| min.holds(props.length, i64::ge))
            && self
                .max_length
                .map_or(true, |max| max.holds(props.length, i64::le))
            && self
                .word_count
                .map_or(true, |count| count.holds(props.word_count, i64::eq))
            && self.contains_character.as_deref().map_or(true, |needle| {
                record
                    .value
                    .to_lowercase()
                    .contains(needle.to_lowercase().as_str())
            })
    }
}

impl StringRepository {
    /// Records matching `filters`, in insertion order.
    pub fn query(&self, filters: &StringFilters) -> Result<Vec<StringRecord>, StoreError> {
        self.find_all(|record| filters.matches(record))
    }
}
