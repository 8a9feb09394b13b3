use crate::error::StoreResult;

/// Byte-key to byte-value state store.
///
/// All implementations must satisfy these invariants:
/// - `get` on a missing key returns `Ok(None)`; `Err` is reserved for
///   backend failures (I/O, corruption).
/// - `put` replaces any existing value under the key atomically at
///   single-key granularity.
/// - There are no range scans and no multi-key transactions. Callers that
///   need atomicity across several keys must get it from the hosting
///   platform.
/// - The store never interprets values — it is a pure key-value store.
pub trait StateStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key is absent.
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Write `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Check whether a key is present.
    ///
    /// Default implementation calls `get()`. Backends may override to
    /// avoid copying the value.
    fn contains(&self, key: &str) -> StoreResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}
