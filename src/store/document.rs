//! Document store collaborator interfaces
//!
//! The realm needs exactly two things from a backing store: connecting by
//! URI, and finding one document by field equality.

use std::sync::Arc;

use crate::error::StoreError;

/// A semi-structured store document.
pub type Document = serde_json::Value;

/// A connected store database.
pub trait DocumentStore: Send + Sync {
    /// Find one document in `collection` whose `field` equals `value`.
    fn find_one(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>, StoreError>;
}

/// Opens store handles from a connection URI.
pub trait Connector: Send + Sync {
    /// Fails with [`StoreError::UnknownHost`] when the store cannot be reached.
    fn connect(&self, uri: &str, database: &str) -> Result<Arc<dyn DocumentStore>, StoreError>;
}

/// Equality test used by the bundled stores: string fields only.
pub(crate) fn field_equals(document: &Document, field: &str, value: &str) -> bool {
    document.get(field).and_then(Document::as_str) == Some(value)
}
