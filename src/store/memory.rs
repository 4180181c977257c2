//! In-process key-value store
//!
//! Same contract as the SQLite store, kept in a `BTreeMap`. Used by tests and
//! by callers that want a scratch workspace.

use std::collections::BTreeMap;
use std::sync::Mutex;

use super::connection::{StoreError, StoreResult};
use super::KeyValueStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.lock().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(store.get("wellup_meals").unwrap().is_none());

        store.set("wellup_meals", "[]").unwrap();
        assert_eq!(store.get("wellup_meals").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.len(), 1);
    }
}
