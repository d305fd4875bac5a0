//! Error handling
//!
//! Defines error types and logging for the realm.

pub mod handlers;
pub mod types;

pub use types::*;
