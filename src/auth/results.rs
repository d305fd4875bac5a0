//! Authentication result types
//!
//! Attempts are tagged internally so the reason for a denial can be logged and
//! tested; callers only ever see an optional principal.

use super::principal::Principal;
use crate::error::AuthError;

#[derive(Debug)]
pub enum AuthOutcome {
    Accepted(Principal),
    Rejected(AuthError),
}

impl AuthOutcome {
    pub fn error(&self) -> Option<&AuthError> {
        match self {
            AuthOutcome::Accepted(_) => None,
            AuthOutcome::Rejected(err) => Some(err),
        }
    }

    pub fn into_principal(self) -> Option<Principal> {
        match self {
            AuthOutcome::Accepted(principal) => Some(principal),
            AuthOutcome::Rejected(_) => None,
        }
    }
}
