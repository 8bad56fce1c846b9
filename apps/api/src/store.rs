//! Key-value store abstraction behind the per-day caches.
//!
//! The service keeps exactly two kinds of ephemeral state: the daily oracle
//! card and the daily generation-usage counter. Both are read-then-write
//! keys with no cross-process consistency requirement, so a process-local
//! map is the real store, not just a test double.

use std::collections::HashMap;
use std::sync::Mutex;

/// Minimal string key-value store. Injected wherever daily state is kept so
/// tests can observe and pre-seed it.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory `KvStore`. Contents do not survive a restart; per-day keys are
/// simply re-created on first use after one.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<HashMap<String, String>>,
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner
            .lock()
            .expect("store mutex poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.inner
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key_is_none() {
        let store = MemoryStore::default();
        assert_eq!(store.get("nope"), None);
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let store = MemoryStore::default();
        store.set("k", "v");
        assert_eq!(store.get("k"), Some("v".to_string()));
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::default();
        store.set("k", "v1");
        store.set("k", "v2");
        assert_eq!(store.get("k"), Some("v2".to_string()));
    }
}
