//! User record projection

/// Read-only view of one user document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub stored_credential: Option<String>,
    /// Role names in document order; empty when the document has none.
    pub roles: Vec<String>,
}
