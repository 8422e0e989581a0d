//! Where bearer tokens come from.
//!
//! The client never stores or refreshes tokens itself. It asks a
//! `CredentialProvider` once per request; whatever authentication flow the
//! application runs is responsible for writing the token somewhere the
//! provider can see it, typically a `LocalStore`.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

/// Supplies the bearer token for the next outbound request.
pub trait CredentialProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

impl<F> CredentialProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn bearer_token(&self) -> Option<String> {
        self()
    }
}

/// Sends every request unauthenticated.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

/// Shared string key/value store. Clones are handles onto the same map.
#[derive(Debug, Clone, Default)]
pub struct LocalStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl LocalStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }
}

/// Reads the token from one key of a `LocalStore` at request time.
#[derive(Debug, Clone)]
pub struct StoredToken {
    store: LocalStore,
    key: String,
}

impl StoredToken {
    #[must_use]
    pub fn new(store: LocalStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

impl CredentialProvider for StoredToken {
    fn bearer_token(&self) -> Option<String> {
        self.store.get(&self.key)
    }
}
