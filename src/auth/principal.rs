//! Authenticated principal

use std::fmt;

/// The identity handed back to the container on success.
#[derive(Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    /// The credential as presented, never its digest. For principals built
    /// straight from the store this is the stored value, if any.
    pub credential: Option<String>,
    /// `None` when role resolution was skipped by policy.
    pub roles: Option<Vec<String>>,
}

impl Principal {
    pub fn new(username: String, credential: Option<String>, roles: Option<Vec<String>>) -> Self {
        Self {
            username,
            credential,
            roles,
        }
    }

    pub fn roles(&self) -> &[String] {
        self.roles.as_deref().unwrap_or_default()
    }
}

// Keep credentials out of logs.
impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Principal")
            .field("username", &self.username)
            .field("credential", &self.credential.as_ref().map(|_| "***"))
            .field("roles", &self.roles)
            .finish()
    }
}
