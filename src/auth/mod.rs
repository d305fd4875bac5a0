//! Authentication system
//!
//! Credential validation against the document store and role resolution.

pub mod policy;
pub mod principal;
pub mod results;
pub mod service;

pub use policy::should_resolve_roles;
pub use principal::Principal;
pub use results::AuthOutcome;
pub use service::MongoRealm;
