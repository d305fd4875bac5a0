//! User record lookup
//!
//! Finds a user document by username and projects it onto a typed record.

pub mod operations;
pub mod record;
pub mod results;

pub use operations::{decode_user, find_by_username};
pub use record::UserRecord;
pub use results::LookupOutcome;
