//! Mongo realm
//!
//! Authenticates a username and credential against user documents held in a
//! document store and resolves the roles the user holds.

pub mod auth;
pub mod config;
pub mod digest;
pub mod error;
pub mod lookup;
pub mod store;
pub mod utils;

pub use auth::{MongoRealm, Principal};
pub use config::{RealmConfig, RolesMode};
