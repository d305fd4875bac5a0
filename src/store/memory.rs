//! In-process document store
//!
//! Keeps collections of documents in memory. Used to embed the realm without
//! an external store and to drive the realm in tests: the connector can be
//! made unreachable, and both connector and store count their calls.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::document::{Connector, Document, DocumentStore, field_equals};
use crate::error::StoreError;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    queries: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `{ "<collection>": [doc, ...], ... }`.
    pub fn from_json(value: Document) -> Result<Self, StoreError> {
        let collections: HashMap<String, Vec<Document>> = serde_json::from_value(value)?;
        Ok(Self {
            collections: RwLock::new(collections),
            queries: AtomicUsize::new(0),
        })
    }

    pub fn insert(&self, collection: &str, document: Document) {
        let mut collections = self
            .collections
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);
    }

    /// Number of `find_one` calls served so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl DocumentStore for MemoryStore {
    fn find_one(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>, StoreError> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        let collections = self
            .collections
            .read()
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| field_equals(doc, field, value)))
            .cloned())
    }
}

/// Hands out one shared [`MemoryStore`] per connect.
pub struct MemoryConnector {
    store: Arc<MemoryStore>,
    reachable: AtomicBool,
    connects: AtomicUsize,
}

impl MemoryConnector {
    pub fn new(store: MemoryStore) -> Self {
        Self::shared(Arc::new(store))
    }

    pub fn shared(store: Arc<MemoryStore>) -> Self {
        Self {
            store,
            reachable: AtomicBool::new(true),
            connects: AtomicUsize::new(0),
        }
    }

    pub fn store(&self) -> &Arc<MemoryStore> {
        &self.store
    }

    /// While unreachable, every connect fails with `UnknownHost`.
    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }

    /// Number of connect attempts, successful or not.
    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

impl Connector for MemoryConnector {
    fn connect(&self, uri: &str, _database: &str) -> Result<Arc<dyn DocumentStore>, StoreError> {
        self.connects.fetch_add(1, Ordering::SeqCst);

        if !self.reachable.load(Ordering::SeqCst) {
            return Err(StoreError::UnknownHost(uri.to_string()));
        }

        let store: Arc<dyn DocumentStore> = self.store.clone();
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finds_first_matching_document() {
        let store = MemoryStore::new();
        store.insert("user", json!({ "username": "alice", "credentials": "pw123" }));
        store.insert("user", json!({ "username": "bob", "credentials": "pw1" }));

        let found = store.find_one("user", "username", "bob").unwrap().unwrap();
        assert_eq!(found["credentials"], "pw1");
        assert!(store.find_one("user", "username", "carol").unwrap().is_none());
        assert!(store.find_one("other", "username", "bob").unwrap().is_none());
        assert_eq!(store.query_count(), 3);
    }

    #[test]
    fn loads_collections_from_json() {
        let store = MemoryStore::from_json(json!({
            "user": [{ "username": "alice" }]
        }))
        .unwrap();
        assert!(store.find_one("user", "username", "alice").unwrap().is_some());
    }

    #[test]
    fn rejects_non_collection_json() {
        assert!(MemoryStore::from_json(json!(["alice"])).is_err());
    }

    #[test]
    fn unreachable_connector_reports_unknown_host() {
        let connector = MemoryConnector::new(MemoryStore::new());
        connector.set_reachable(false);

        let err = connector.connect("mongodb://nowhere/", "db").err().unwrap();
        assert!(matches!(err, StoreError::UnknownHost(uri) if uri == "mongodb://nowhere/"));
        assert_eq!(connector.connect_count(), 1);
    }
}
