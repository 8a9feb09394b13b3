use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::StateStore;

/// File-backed state store.
///
/// The whole keyspace lives in one JSON document on disk: a map from store
/// key to hex-encoded value, in sorted key order. Every `put` rewrites the
/// document through a temp file and an atomic rename, so a crash mid-write
/// leaves the previous document intact. Reads are served from memory.
///
/// Suited to the small ledgers the CLI works with; not a database.
pub struct FileStateStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl FileStateStore {
    /// Open the store at `path`, loading the existing document if present.
    ///
    /// Parent directories are created as needed. A missing file is an empty
    /// store; an unreadable or malformed file is a [`StoreError::Corrupt`].
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let entries = if path.exists() {
            Self::load(&path)?
        } else {
            HashMap::new()
        };

        debug!(path = %path.display(), entries = entries.len(), "opened state store");
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    fn load(path: &Path) -> StoreResult<HashMap<String, Vec<u8>>> {
        let raw = std::fs::read_to_string(path)?;
        let document: BTreeMap<String, String> =
            serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let mut entries = HashMap::with_capacity(document.len());
        for (key, hex_value) in document {
            let value = hex::decode(&hex_value).map_err(|e| StoreError::Corrupt {
                path: path.display().to_string(),
                reason: format!("value for key {key:?} is not hex: {e}"),
            })?;
            entries.insert(key, value);
        }
        Ok(entries)
    }

    /// Serialize the current map and atomically replace the document.
    ///
    /// Called with the write lock held, which serializes writers.
    fn persist(&self, entries: &HashMap<String, Vec<u8>>) -> StoreResult<()> {
        let document: BTreeMap<&String, String> = entries
            .iter()
            .map(|(key, value)| (key, hex::encode(value)))
            .collect();
        let raw = serde_json::to_vec_pretty(&document)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&raw)?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

impl StateStore for FileStateStore {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        let mut map = self.entries.write().expect("lock poisoned");
        map.insert(key.to_string(), value.to_vec());
        self.persist(&map)
    }
}

impl std::fmt::Debug for FileStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStateStore")
            .field("path", &self.path)
            .field("entry_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("state.json")
    }

    #[test]
    fn open_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::open(store_path(&dir)).unwrap();
        assert!(store.is_empty());
        assert!(store.get("anything").unwrap().is_none());
    }

    #[test]
    fn put_then_reopen_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let store = FileStateStore::open(&path).unwrap();
        store.put("Req:r1", b"request bytes").unwrap();
        store.put("Per:alice", b"person bytes").unwrap();
        drop(store);

        let reopened = FileStateStore::open(&path).unwrap();
        assert_eq!(reopened.len(), 2);
        assert_eq!(
            reopened.get("Req:r1").unwrap(),
            Some(b"request bytes".to_vec())
        );
        assert_eq!(
            reopened.get("Per:alice").unwrap(),
            Some(b"person bytes".to_vec())
        );
    }

    #[test]
    fn put_replaces_existing_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::open(store_path(&dir)).unwrap();
        store.put("k", b"old").unwrap();
        store.put("k", b"new").unwrap();
        assert_eq!(store.get("k").unwrap(), Some(b"new".to_vec()));
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/state.json");
        let store = FileStateStore::open(&nested).unwrap();
        store.put("k", b"v").unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn values_survive_arbitrary_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        let value: Vec<u8> = (0u8..=255).collect();

        let store = FileStateStore::open(&path).unwrap();
        store.put("binary", &value).unwrap();
        drop(store);

        let reopened = FileStateStore::open(&path).unwrap();
        assert_eq!(reopened.get("binary").unwrap(), Some(value));
    }

    #[test]
    fn malformed_document_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        std::fs::write(&path, b"not a json map").unwrap();

        let err = FileStateStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn non_hex_value_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        std::fs::write(&path, br#"{"k": "zzzz"}"#).unwrap();

        let err = FileStateStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn document_is_sorted_and_hex_encoded() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        let store = FileStateStore::open(&path).unwrap();
        store.put("b", b"2").unwrap();
        store.put("a", b"1").unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let document: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        let keys: Vec<&String> = document.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(document["a"], hex::encode(b"1"));
    }
}
