//! Umbrella crate for the string analyzer.
//!
//! Stitches the analyzer and the repository together so callers can work in
//! terms of raw string values: submit a value, look it up by value, remove
//! it by value. Identity (the SHA-256 of the value) is computed here, never
//! by the caller.

pub use analysis::{
    CharacterFrequencyMap, StringProperties, analyze, count_words, identity_of, is_blank,
    is_whitespace, strip_whitespace,
};
pub use store::{
    BackendConfig, Count, FilterApplied, InMemoryBackend, JsonFileBackend, StoreBackend,
    StoreError, StringFilters, StringRecord, StringRepository,
};

use std::error::Error;
use std::fmt;

/// Errors returned by the value-addressed operations.
#[derive(Debug)]
pub enum SubmitError {
    /// The value is empty or whitespace-only.
    EmptyValue,
    /// The repository rejected or failed the operation.
    Store(StoreError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::EmptyValue => write!(f, "value is empty after trimming"),
            SubmitError::Store(err) => write!(f, "store failure: {err}"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SubmitError::Store(err) => Some(err),
            SubmitError::EmptyValue => None,
        }
    }
}

impl From<StoreError> for SubmitError {
    fn from(value: StoreError) -> Self {
        SubmitError::Store(value)
    }
}

/// Analyze `value` and store it. Blank values are rejected before any
/// hashing; a value already stored yields [`StoreError::Conflict`].
pub fn submit(repo: &StringRepository, value: &str) -> Result<StringRecord, SubmitError> {
    if is_blank(value) {
        return Err(SubmitError::EmptyValue);
    }
    let record = repo.insert(StringRecord::new(value))?;
    tracing::debug!(id = %record.id, "submitted string");
    Ok(record)
}

/// Fetch the record whose value is exactly `value`.
pub fn lookup(repo: &StringRepository, value: &str) -> Result<StringRecord, StoreError> {
    repo.find_by_id(&identity_of(value))
}

/// Delete the record whose value is exactly `value`, returning it.
pub fn remove(repo: &StringRepository, value: &str) -> Result<StringRecord, StoreError> {
    repo.delete_by_id(&identity_of(value))
}
