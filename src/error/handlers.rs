//! Error handlers
//!
//! Maps authentication failures onto log severities.

use crate::error::types::AuthError;
use log::{Level, debug, error, info, warn};

/// Severity an authentication failure is reported at.
pub fn failure_level(err: &AuthError) -> Level {
    match err {
        AuthError::InvalidInput => Level::Debug,
        AuthError::StoreUnavailable { .. } => Level::Error,
        AuthError::RecordNotFound(_) | AuthError::MissingCredential(_) => Level::Warn,
        AuthError::CredentialMismatch(_) => Level::Info,
    }
}

/// Log an authentication failure at its severity.
pub fn log_auth_failure(err: &AuthError) {
    match failure_level(err) {
        Level::Error => error!("{}", err),
        Level::Warn => warn!("{}", err),
        Level::Info => info!("{}", err),
        _ => debug!("{}", err),
    }
}
