//! # Secret Cache
//!
//! Read cache owned by one provider instance.
//!
//! Entries are only ever added. Writes and deletes through the provider do
//! not touch the cache, so a key that has been read keeps returning the value
//! first fetched for as long as the provider lives. Callers that need a fresh
//! read build a new provider.
//!
//! The lock is never held across an `.await`. Two concurrent misses on the
//! same key may both fetch; the later insert replaces the earlier one.

use crate::secret::Secret;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Default)]
pub struct SecretCache {
    entries: RwLock<HashMap<String, Arc<Secret>>>,
}

impl SecretCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<Arc<Secret>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map(Arc::clone)
    }

    pub fn insert(&self, secret: Arc<Secret>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(secret.key().to_string(), secret);
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_returns_same_instance() {
        let cache = SecretCache::new();
        let secret = Arc::new(Secret::new("db", json!({"username": "test"})));
        cache.insert(Arc::clone(&secret));

        let first = cache.get("db").unwrap();
        let second = cache.get("db").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &secret));
    }

    #[test]
    fn test_missing_key() {
        let cache = SecretCache::new();
        assert!(cache.get("missing").is_none());
        assert!(!cache.contains("missing"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_last_insert_wins() {
        let cache = SecretCache::new();
        cache.insert(Arc::new(Secret::new("db", "first")));
        cache.insert(Arc::new(Secret::new("db", "second")));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("db").unwrap().value(), &json!("second"));
    }
}
