//! # String store
//!
//! Owns the authoritative collection of [`StringRecord`]s and mediates every
//! read and write against a persistence backend.
//!
//! ## Core Features
//!
//! - **Content addressing**: a record's id is the SHA-256 of its value, so
//!   inserting the same string twice is a [`StoreError::Conflict`].
//! - **Pluggable Backends**: persistence goes through the [`StoreBackend`]
//!   trait. Out of the box:
//!   - [`InMemoryBackend`] for ephemeral runs and tests.
//!   - [`JsonFileBackend`], a single `{ "strings": [...] }` document.
//! - **Whole-collection durability**: the full collection is loaded once at
//!   startup and rewritten after every successful mutation. A mutation whose
//!   write fails is rolled back in memory and the error is returned.
//! - **Filter queries**: [`StringFilters`] evaluates the listing filters
//!   with a linear scan in insertion order.
//!
//! ## Example Usage
//!
//! ```
//! use store::{BackendConfig, StringFilters, StringRecord, StringRepository};
//!
//! let repo = StringRepository::open(&BackendConfig::in_memory()).unwrap();
//! let record = repo.insert(StringRecord::new("racecar")).unwrap();
//!
//! assert_eq!(repo.find_by_id(&record.id).unwrap().value, "racecar");
//!
//! let palindromes = repo
//!     .query(&StringFilters::new().with_is_palindrome(true))
//!     .unwrap();
//! assert_eq!(palindromes.len(), 1);
//! ```

mod backend;
mod query;
mod record;

pub use backend::{BackendConfig, InMemoryBackend, JsonFileBackend, StoreBackend};
pub use query::{Count, FilterApplied, StringFilters};
pub use record::StringRecord;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

/// Errors returned by the repository and its backends.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record {id} already exists")]
    Conflict { id: String },
    #[error("record {id} not found")]
    NotFound { id: String },
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend<E: std::fmt::Display>(err: E) -> Self {
        Self::Backend(err.to_string())
    }

    pub fn io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// The repository.
///
/// Mutations hold the write lock across the backend write, so they are
/// applied one at a time and each is durable before the call returns.
pub struct StringRepository {
    /// Where the collection is persisted.
    backend: Box<dyn StoreBackend>,
    /// The authoritative collection, in insertion order.
    records: RwLock<Vec<StringRecord>>,
}

impl StringRepository {
    /// Build the configured backend and load the collection from it.
    pub fn open(cfg: &BackendConfig) -> Result<Self, StoreError> {
        let backend = cfg.build()?;
        Self::with_backend(backend)
    }

    /// Load the collection from a caller-supplied backend.
    ///
    /// Records whose id is not the identity of their value, and repeats of
    /// an id already loaded, are dropped with a warning. The backend is
    /// rewritten without them on the next mutation.
    pub fn with_backend(backend: Box<dyn StoreBackend>) -> Result<Self, StoreError> {
        let loaded = backend.load()?;
        let total = loaded.len();
        let records = retain_consistent(loaded);
        tracing::info!(
            backend = %backend.describe(),
            records = records.len(),
            dropped = total - records.len(),
            "loaded string collection"
        );
        Ok(Self {
            backend,
            records: RwLock::new(records),
        })
    }

    /// Append `record` and persist. Fails with [`StoreError::Conflict`] when a
    /// record with the same id exists; the existing record is left untouched.
    pub fn insert(&self, record: StringRecord) -> Result<StringRecord, StoreError> {
        let mut guard = self.write()?;
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(StoreError::Conflict { id: record.id });
        }

        guard.push(record.clone());
        if let Err(err) = self.backend.save(&guard) {
            guard.pop();
            tracing::error!(id = %record.id, error = %err, "persisting insert failed, rolled back");
            return Err(err);
        }

        tracing::debug!(id = %record.id, total = guard.len(), "inserted record");
        Ok(record)
    }

    /// Look a record up by id.
    pub fn find_by_id(&self, id: &str) -> Result<StringRecord, StoreError> {
        self.read()?
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    /// All records satisfying `predicate`, in insertion order.
    pub fn find_all<P>(&self, predicate: P) -> Result<Vec<StringRecord>, StoreError>
    where
        P: Fn(&StringRecord) -> bool,
    {
        Ok(self
            .read()?
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect())
    }

    /// Remove the record with `id` and persist. Returns the removed record.
    pub fn delete_by_id(&self, id: &str) -> Result<StringRecord, StoreError> {
        let mut guard = self.write()?;
        let position = guard
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        let removed = guard.remove(position);
        if let Err(err) = self.backend.save(&guard) {
            guard.insert(position, removed);
            tracing::error!(id, error = %err, "persisting delete failed, rolled back");
            return Err(err);
        }

        tracing::debug!(id, total = guard.len(), "deleted record");
        Ok(removed)
    }

    /// Number of stored records.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.is_empty())
    }

    /// A copy of the whole collection in insertion order.
    pub fn snapshot(&self) -> Result<Vec<StringRecord>, StoreError> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<StringRecord>>, StoreError> {
        self.records
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<StringRecord>>, StoreError> {
        self.records
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))
    }
}

/// Keep the first record for each id, and only records whose id matches
/// their value.
fn retain_consistent(loaded: Vec<StringRecord>) -> Vec<StringRecord> {
    let mut seen = HashSet::with_capacity(loaded.len());
    loaded
        .into_iter()
        .filter(|record| {
            if record.id != analysis::identity_of(&record.value) {
                tracing::warn!(id = %record.id, "dropping stored record, id does not match value");
                return false;
            }
            if !seen.insert(record.id.clone()) {
                tracing::warn!(id = %record.id, "dropping duplicate stored record");
                return false;
            }
            true
        })
        .collect()
}
