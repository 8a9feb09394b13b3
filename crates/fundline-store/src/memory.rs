use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StoreResult;
use crate::traits::StateStore;

/// In-memory, HashMap-based state store.
///
/// Intended for tests and embedding. All values are held in memory behind a
/// `RwLock` for safe concurrent access. Values are cloned on read.
pub struct InMemoryStateStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryStateStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Remove all entries from the store.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }

    /// Return a sorted list of all keys in the store.
    pub fn keys(&self) -> Vec<String> {
        let map = self.entries.read().expect("lock poisoned");
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for InMemoryStateStore {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        let mut map = self.entries.write().expect("lock poisoned");
        map.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn contains(&self, key: &str) -> StoreResult<bool> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.contains_key(key))
    }
}

impl std::fmt::Debug for InMemoryStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryStateStore")
            .field("entry_count", &count)
            .finish()
    }
}
