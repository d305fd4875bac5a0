//! Error types
//!
//! Defines domain-specific error types for the store layer and the realm.

use std::fmt;
use std::io;

/// Document store errors
#[derive(Debug)]
pub enum StoreError {
    /// The store named by the connection URI could not be reached.
    UnknownHost(String),
    UnsupportedScheme(String),
    IoError(io::Error),
    Malformed(String),
    Query(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::UnknownHost(uri) => write!(f, "Unknown host: {}", uri),
            StoreError::UnsupportedScheme(uri) => write!(f, "Unsupported store URI: {}", uri),
            StoreError::IoError(e) => write!(f, "IO error: {}", e),
            StoreError::Malformed(msg) => write!(f, "Malformed store data: {}", msg),
            StoreError::Query(msg) => write!(f, "Query failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::IoError(error)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::Malformed(error.to_string())
    }
}

/// Authentication failure kinds
///
/// These never reach the caller of `authenticate`; they are kept for logging
/// and for inspecting an attempt in tests.
#[derive(Debug)]
pub enum AuthError {
    InvalidInput,
    StoreUnavailable { uri: String, source: StoreError },
    RecordNotFound(String),
    MissingCredential(String),
    CredentialMismatch(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidInput => write!(f, "Missing username or credentials"),
            AuthError::StoreUnavailable { uri, source } => {
                write!(f, "Store unavailable, Mongo URI: {}: {}", uri, source)
            }
            AuthError::RecordNotFound(u) => write!(f, "Unknown username, Username: {}", u),
            AuthError::MissingCredential(u) => {
                write!(f, "Credentials for {} could not be located", u)
            }
            AuthError::CredentialMismatch(u) => write!(f, "Authentication Failure for {}", u),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::StoreUnavailable { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// General realm error used by the operator binary
#[derive(Debug)]
pub enum RealmError {
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for RealmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RealmError::Config(e) => write!(f, "Configuration error: {}", e),
            RealmError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for RealmError {}

impl From<config::ConfigError> for RealmError {
    fn from(error: config::ConfigError) -> Self {
        RealmError::Config(error)
    }
}

impl From<io::Error> for RealmError {
    fn from(error: io::Error) -> Self {
        RealmError::IoError(error)
    }
}
