//! Module `connection`
//!
//! Holds the single, lazily created store handle shared by every
//! authentication attempt. The handle is created on first use and kept for
//! the lifetime of the connection object; a failed creation caches nothing,
//! so the next caller tries again from scratch.

use log::{debug, info};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::document::{Connector, DocumentStore};
use crate::error::StoreError;

/// Shared store handle.
pub type StoreHandle = Arc<dyn DocumentStore>;

pub struct StoreConnection {
    connector: Arc<dyn Connector>,
    uri: String,
    database: String,
    handle: Mutex<Option<StoreHandle>>,
}

impl StoreConnection {
    pub fn new(connector: Arc<dyn Connector>, uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            connector,
            uri: uri.into(),
            database: database.into(),
            handle: Mutex::new(None),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Return the shared handle, connecting first if there is none yet.
    ///
    /// The lock is held across the connect call so concurrent first callers
    /// wait for the winner and then observe its handle.
    pub fn acquire(&self) -> Result<StoreHandle, StoreError> {
        let mut slot = self.slot();

        if let Some(handle) = slot.as_ref() {
            return Ok(Arc::clone(handle));
        }

        debug!("Connecting to {} (database {})", self.uri, self.database);
        let handle = self.connector.connect(&self.uri, &self.database)?;
        info!("Connected to {}", self.uri);

        *slot = Some(Arc::clone(&handle));
        Ok(handle)
    }

    pub fn is_connected(&self) -> bool {
        self.slot().is_some()
    }

    /// Drop the shared handle; the next `acquire` reconnects.
    pub fn reset(&self) {
        if self.slot().take().is_some() {
            info!("Released store handle for {}", self.uri);
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<StoreHandle>> {
        // The slot only ever holds a fully built handle, so a poisoned lock is still consistent.
        self.handle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
