//! Credential store for the authenticated principal

use std::sync::{Arc, RwLock};

/// The authenticated principal's identity and session token
///
/// Both fields are set together or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub session_id: String,
}

/// Shared holder of the current credentials
///
/// Cloning the store yields another handle onto the same state, so one
/// store can be injected into every component that issues authenticated
/// requests. Readers take a snapshot at call time; there is no
/// subscription mechanism.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    inner: Arc<RwLock<Option<Credentials>>>,
}

impl CredentialStore {
    /// Create an empty store; loaders used before `set` send no
    /// identity headers and rely on the server to reject them.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored pair atomically
    pub fn set(&self, username: impl Into<String>, session_id: impl Into<String>) {
        let mut guard = self.inner.write().expect("credential lock poisoned");
        *guard = Some(Credentials {
            username: username.into(),
            session_id: session_id.into(),
        });
    }

    /// Current pair, if one has been set
    pub fn snapshot(&self) -> Option<Credentials> {
        self.inner.read().expect("credential lock poisoned").clone()
    }

    /// Forget the stored pair
    pub fn clear(&self) {
        let mut guard = self.inner.write().expect("credential lock poisoned");
        *guard = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_store_is_empty() {
        let store = CredentialStore::new();
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn test_set_replaces_pair_atomically() {
        let store = CredentialStore::new();
        store.set("john-williams", "session-1");
        store.set("emmy-noether", "session-2");

        let creds = store.snapshot().unwrap();
        assert_eq!(creds.username, "emmy-noether");
        assert_eq!(creds.session_id, "session-2");
    }

    #[test]
    fn test_clones_share_state() {
        let store = CredentialStore::new();
        let handle = store.clone();
        store.set("emmy-noether", "token");

        assert_eq!(handle.snapshot().unwrap().username, "emmy-noether");

        handle.clear();
        assert!(store.snapshot().is_none());
    }
}
