//! JSON file backed store
//!
//! Resolves `file://<dir>` URIs: database `<db>` is read from
//! `<dir>/<db>.json`, a JSON object mapping collection names to arrays of
//! documents. The file is read once per connect.

use log::debug;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use super::document::{Connector, DocumentStore};
use super::memory::MemoryStore;
use crate::error::StoreError;

const FILE_SCHEME: &str = "file://";

#[derive(Debug, Default, Clone, Copy)]
pub struct FileConnector;

impl FileConnector {
    fn database_path(uri: &str, database: &str) -> Result<PathBuf, StoreError> {
        let dir = uri
            .strip_prefix(FILE_SCHEME)
            .ok_or_else(|| StoreError::UnsupportedScheme(uri.to_string()))?;

        let dir = PathBuf::from(dir);
        if !dir.is_dir() {
            return Err(StoreError::UnknownHost(uri.to_string()));
        }

        Ok(dir.join(format!("{database}.json")))
    }
}

impl Connector for FileConnector {
    fn connect(&self, uri: &str, database: &str) -> Result<Arc<dyn DocumentStore>, StoreError> {
        let path = Self::database_path(uri, database)?;
        debug!("Loading store database from {}", path.display());

        let raw = fs::read_to_string(&path)?;
        let store = MemoryStore::from_json(serde_json::from_str(&raw)?)?;
        Ok(Arc::new(store))
    }
}
