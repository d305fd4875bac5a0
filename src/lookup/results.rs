//! Lookup result types
//!
//! A missing user is an ordinary outcome, not an error.

use super::record::UserRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(UserRecord),
    NotFound,
}

impl LookupOutcome {
    pub fn into_record(self) -> Option<UserRecord> {
        match self {
            LookupOutcome::Found(record) => Some(record),
            LookupOutcome::NotFound => None,
        }
    }
}
