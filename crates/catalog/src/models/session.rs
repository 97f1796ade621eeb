//! Persisted session state.
//!
//! The catalog view does not own authentication; it only clears the session
//! marker when the remote store reports the user record gone (stale
//! session). The storage itself is abstracted behind [`SessionStore`] so the
//! shell can back it with whatever persistence it uses.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Session keys used by the catalog view.
pub mod keys {
    /// Key under which the shell persists the logged-in user marker.
    pub const CURRENT_USER: &str = "currentUser";
}

/// Key-value session storage owned by the application shell.
pub trait SessionStore: Send + Sync {
    /// Read a value by key.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value under a key.
    fn insert(&self, key: &str, value: &str);

    /// Remove a key. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

/// In-memory session store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemorySessionStore::default();
        assert!(store.get(keys::CURRENT_USER).is_none());

        store.insert(keys::CURRENT_USER, "7");
        assert_eq!(store.get(keys::CURRENT_USER).as_deref(), Some("7"));

        store.remove(keys::CURRENT_USER);
        assert!(store.get(keys::CURRENT_USER).is_none());

        // Removing again is a no-op
        store.remove(keys::CURRENT_USER);
    }
}
