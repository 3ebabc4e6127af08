use crate::{StoreError, StringRecord};
use std::path::PathBuf;
use std::sync::RwLock;

/// Persistence adapter for the repository.
///
/// Backends deal in whole collections: the repository loads everything once
/// at startup and hands the complete, ordered record list to [`save`] after
/// every mutation. There are no partial or incremental writes.
///
/// [`save`]: StoreBackend::save
pub trait StoreBackend: Send + Sync {
    /// Load the full collection in insertion order.
    fn load(&self) -> Result<Vec<StringRecord>, StoreError>;
    /// Replace the persisted collection with `records`. Must be durable
    /// before returning `Ok`.
    fn save(&self, records: &[StringRecord]) -> Result<(), StoreError>;
    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}

/// Configuration for selecting and building a backend.
///
/// # Example
/// ```
/// use store::BackendConfig;
///
/// // In-memory (for testing)
/// let config = BackendConfig::in_memory();
///
/// // JSON document on disk
/// let config = BackendConfig::json_file("data/db.json");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BackendConfig {
    /// A single JSON document `{ "strings": [...] }` rewritten on every mutation.
    JsonFile { path: PathBuf },
    /// Nothing leaves the process. Useful for tests.
    #[default]
    InMemory,
}

impl BackendConfig {
    pub fn in_memory() -> Self {
        BackendConfig::InMemory
    }

    pub fn json_file<P: Into<PathBuf>>(path: P) -> Self {
        BackendConfig::JsonFile { path: path.into() }
    }

    /// Build the backend described by this configuration.
    pub fn build(&self) -> Result<Box<dyn StoreBackend>, StoreError> {
        match self {
            BackendConfig::InMemory => Ok(Box::new(InMemoryBackend::new())),
            BackendConfig::JsonFile { path } => Ok(Box::new(JsonFileBackend::open(path)?)),
        }
    }
}

/// An in-memory backend using a `RwLock` around the saved records.
pub struct InMemoryBackend {
    records: RwLock<Vec<StringRecord>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreBackend for InMemoryBackend {
    fn load(&self) -> Result<Vec<StringRecord>, StoreError> {
        let guard = self
            .records
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        Ok(guard.clone())
    }

    fn save(&self, records: &[StringRecord]) -> Result<(), StoreError> {
        let mut guard = self
            .records
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        *guard = records.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}

/// The JSON file backend implementation.
pub mod json_file;

pub use json_file::JsonFileBackend;
