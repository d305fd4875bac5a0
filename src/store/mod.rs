//! Document store access
//!
//! Collaborator traits, the shared lazily created connection, and the
//! bundled store implementations.

pub mod connection;
pub mod document;
pub mod file;
pub mod memory;

pub use connection::{StoreConnection, StoreHandle};
pub use document::{Connector, Document, DocumentStore};
pub use file::FileConnector;
pub use memory::{MemoryConnector, MemoryStore};
