// storage.rs — StateStore trait and backends.
//
// The snapshot lives in a durable string-keyed store. The StateStore
// trait is the abstraction API; JsonFileStore writes one file per key so
// state survives restarts, and MemoryStore backs tests and ephemeral
// runs. The trait can be swapped for SQLite or a browser-style store
// later without changing the rest of the system.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CheckInError;

/// Fixed key for the check-in snapshot blob.
pub const SNAPSHOT_KEY: &str = "summit-checkin-state";

/// A durable string-keyed store for opaque blobs.
pub trait StateStore {
    /// Read the blob for `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>, CheckInError>;

    /// Write (or overwrite) the blob for `key`.
    fn put(&mut self, key: &str, value: &str) -> Result<(), CheckInError>;
}

/// File-backed StateStore: one file per key, `<dir>/<key>.json`.
///
/// Simple but effective — no database needed, and the snapshot stays
/// easy to inspect manually.
pub struct JsonFileStore {
    store_dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given directory.
    /// Creates the directory if it doesn't exist.
    pub fn new(store_dir: impl AsRef<Path>) -> Result<Self, CheckInError> {
        let store_dir = store_dir.as_ref().to_path_buf();
        fs::create_dir_all(&store_dir).map_err(|source| CheckInError::IoError {
            path: store_dir.display().to_string(),
            source,
        })?;
        Ok(Self { store_dir })
    }

    /// Path to the file for a given key.
    fn key_file(&self, key: &str) -> PathBuf {
        self.store_dir.join(format!("{}.json", key))
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CheckInError> {
        let path = self.key_file(key);
        if !path.exists() {
            return Ok(None);
        }
        let blob = fs::read_to_string(&path).map_err(|source| CheckInError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Some(blob))
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), CheckInError> {
        let path = self.key_file(key);
        fs::write(&path, value).map_err(|source| CheckInError::IoError {
            path: path.display().to_string(),
            source,
        })
    }
}

/// In-process StateStore for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, e.g. to simulate a prior session in tests.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CheckInError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), CheckInError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_store_put_and_get_round_trip() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("store")).unwrap();

        store.put(SNAPSHOT_KEY, "{\"total\":0}").unwrap();
        let blob = store.get(SNAPSHOT_KEY).unwrap();
        assert_eq!(blob.as_deref(), Some("{\"total\":0}"));
    }

    #[test]
    fn file_store_get_missing_returns_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("store")).unwrap();
        assert!(store.get(SNAPSHOT_KEY).unwrap().is_none());
    }

    #[test]
    fn file_store_put_overwrites() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("store")).unwrap();

        store.put(SNAPSHOT_KEY, "first").unwrap();
        store.put(SNAPSHOT_KEY, "second").unwrap();
        assert_eq!(store.get(SNAPSHOT_KEY).unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempdir().unwrap();
        let store_path = dir.path().join("store");

        // Write with first store instance.
        {
            let mut store = JsonFileStore::new(&store_path).unwrap();
            store.put(SNAPSHOT_KEY, "persisted").unwrap();
        }

        // Read with second store instance (simulating restart).
        {
            let store = JsonFileStore::new(&store_path).unwrap();
            assert_eq!(
                store.get(SNAPSHOT_KEY).unwrap().as_deref(),
                Some("persisted")
            );
        }
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.get("k").unwrap().is_none());
        store.put("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
