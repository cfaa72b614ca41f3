//! File-backed store
//!
//! Keeps every key in a single JSON object file, e.g.
//! `{"repositories": "[{\"name\":\"owner/repo\"}]"}`.
//! Writes go through a temporary file in the same directory followed by a
//! rename, so a crash mid-write leaves the previous content intact.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Store;
use crate::error::{StoreError, StoreResult};

/// Store persisted as a JSON object file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by `path`
    ///
    /// The file is not touched until the first write. A missing file reads
    /// as an empty store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_values(&self) -> StoreResult<BTreeMap<String, String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn write_values(&self, values: &BTreeMap<String, String>) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let content = serde_json::to_string_pretty(values)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!("Wrote {} key(s) to {}", values.len(), self.path.display());
        Ok(())
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.read_values()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut values = match self.read_values() {
            Ok(values) => values,
            Err(StoreError::Corrupt(e)) => {
                warn!("Replacing corrupt store file {}: {}", self.path.display(), e);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };

        values.insert(key.to_string(), value.to_string());
        self.write_values(&values)
    }

    fn clear(&self) -> StoreResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("store.json"));

        assert_eq!(store.path(), dir.path().join("store.json"));
        assert_eq!(store.get("repositories").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        FileStore::new(&path).set("repositories", "[]").unwrap();
        FileStore::new(&path).set("theme", "dark").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("repositories").unwrap(), Some("[]".to_string()));
        assert_eq!(reopened.get("theme").unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_clear_removes_file_and_all_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = FileStore::new(&path);
        store.set("repositories", "[]").unwrap();
        store.set("theme", "dark").unwrap();

        store.clear().unwrap();

        assert!(!path.exists());
        assert_eq!(store.get("theme").unwrap(), None);
        // clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_errors_on_get_and_is_replaced_on_set() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileStore::new(&path);

        assert!(matches!(store.get("repositories"), Err(StoreError::Corrupt(_))));

        store.set("repositories", "[]").unwrap();
        assert_eq!(store.get("repositories").unwrap(), Some("[]".to_string()));
    }
}
