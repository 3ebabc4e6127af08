//! JSON document backend.
//!
//! The whole collection lives in one file shaped as
//!
//! ```json
//! { "strings": [ { "id": "...", "value": "...", "properties": { ... }, "created_at": "..." } ] }
//! ```
//!
//! Writes go to a sibling `*.tmp` file which is fsynced and then renamed
//! over the target, so readers only ever see a complete document. A missing
//! or blank file loads as an empty collection.

use crate::{StoreBackend, StoreError, StringRecord};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    strings: Vec<StringRecord>,
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    strings: &'a [StringRecord],
}

/// Backend persisting the collection as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Use the document at `path`. Parent directories are created on the
    /// first save; the file itself does not need to exist yet.
    ///
    /// # Example
    /// ```no_run
    /// use store::JsonFileBackend;
    ///
    /// let backend = JsonFileBackend::open("/tmp/strings.json").unwrap();
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if path.is_dir() {
            return Err(StoreError::backend(format!(
                "{} is a directory, expected a JSON file",
                path.display()
            )));
        }
        Ok(Self { path })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StoreBackend for JsonFileBackend {
    fn load(&self) -> Result<Vec<StringRecord>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        let document: Document = serde_json::from_str(&raw)?;
        Ok(document.strings)
    }

    fn save(&self, records: &[StringRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let payload = serde_json::to_vec_pretty(&DocumentRef { strings: records })?;
        let tmp = self.temp_path();
        {
            let mut file = File::create(&tmp).map_err(|e| StoreError::io(&tmp, e))?;
            file.write_all(&payload)
                .and_then(|_| file.sync_all())
                .map_err(|e| StoreError::io(&tmp, e))?;
        }
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::io(&self.path, e))
    }

    fn describe(&self) -> String {
        format!("json-file:{}", self.path.display())
    }
}
