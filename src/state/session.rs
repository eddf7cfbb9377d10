//! Persisted single-user record.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only state that survives a reload. At most one user record exists,
//! stored as JSON under one key of an injected [`KeyValueStore`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{KeyValueStore, StoreError};

/// The account record. The password is kept in plaintext.
///
/// A record without `email` or `password` fails to decode; only `name` may
/// be missing, in which case the profile falls back to the guest name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Reads and writes the user record under a fixed storage key.
#[derive(Debug)]
pub struct SessionStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S, key: &str) -> Self {
        Self { store, key: key.to_owned() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The persisted user, if any.
    pub fn load(&self) -> Result<Option<User>, StoreError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw).map(Some).map_err(StoreError::Decode)
    }

    /// Persist `user`, replacing any previous record.
    pub fn save(&self, user: &User) -> Result<(), StoreError> {
        let raw = serde_json::to_string(user).map_err(StoreError::Encode)?;
        self.store.set(&self.key, &raw)
    }

    /// Remove the persisted record.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.delete(&self.key)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
