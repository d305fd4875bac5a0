//! Authentication service
//!
//! Implements the realm the container calls for every request that needs an
//! authenticated principal. Each attempt runs once: validate the input, fetch
//! the stored credential, compare it under the digest policy, then resolve
//! roles. Every failure is logged and collapses to "no principal".

use log::{error, info, warn};
use std::sync::Arc;

use super::policy::should_resolve_roles;
use super::principal::Principal;
use super::results::AuthOutcome;
use crate::config::RealmConfig;
use crate::digest::DigestPolicy;
use crate::error::{AuthError, StoreError};
use crate::error::handlers::log_auth_failure;
use crate::lookup::{LookupOutcome, find_by_username};
use crate::store::{Connector, StoreConnection};

pub struct MongoRealm {
    config: Arc<RealmConfig>,
    connection: Arc<StoreConnection>,
    digest: DigestPolicy,
}

impl MongoRealm {
    pub const NAME: &'static str = "MongoRealm";

    pub fn new(config: Arc<RealmConfig>, connection: Arc<StoreConnection>) -> Self {
        let digest = DigestPolicy::new(config.digest);
        Self {
            config,
            connection,
            digest,
        }
    }

    /// Build a realm with its own lazily opened connection.
    pub fn with_connector(config: Arc<RealmConfig>, connector: Arc<dyn Connector>) -> Self {
        let connection = Arc::new(StoreConnection::new(
            connector,
            config.mongo_client_uri.clone(),
            config.database.clone(),
        ));
        Self::new(config, connection)
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Descriptive implementation string, `mongo-realm/<version>`.
    pub fn info(&self) -> String {
        format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    pub fn connection(&self) -> &Arc<StoreConnection> {
        &self.connection
    }

    /// Return the principal for `username` if `credential` is valid.
    pub fn authenticate(&self, username: Option<&str>, credential: Option<&str>) -> Option<Principal> {
        let outcome = self.attempt(username, credential);
        if let Some(err) = outcome.error() {
            log_auth_failure(err);
        }
        outcome.into_principal()
    }

    /// Run one authentication attempt and report why it was rejected.
    pub fn attempt(&self, username: Option<&str>, credential: Option<&str>) -> AuthOutcome {
        // Nothing to check, so don't bother the store
        let (Some(username), Some(credential)) = (username, credential) else {
            return AuthOutcome::Rejected(AuthError::InvalidInput);
        };

        let record = match self.fetch(username) {
            Ok(LookupOutcome::Found(record)) => record,
            Ok(LookupOutcome::NotFound) => {
                return AuthOutcome::Rejected(AuthError::RecordNotFound(username.to_string()));
            }
            Err(err) => return AuthOutcome::Rejected(err),
        };

        let Some(stored) = record.stored_credential else {
            return AuthOutcome::Rejected(AuthError::MissingCredential(username.to_string()));
        };

        if !self.digest.matches(credential, &stored) {
            return AuthOutcome::Rejected(AuthError::CredentialMismatch(username.to_string()));
        }

        info!("Authentication Success for {}", username);

        let roles = self.roles_for(username);
        AuthOutcome::Accepted(Principal::new(
            username.to_string(),
            Some(credential.to_string()),
            roles,
        ))
    }

    /// Build a principal from store data alone, without checking a credential.
    pub fn lookup_principal(&self, username: &str) -> Option<Principal> {
        let record = match self.fetch(username) {
            Ok(LookupOutcome::Found(record)) => record,
            Ok(LookupOutcome::NotFound) => {
                log_auth_failure(&AuthError::RecordNotFound(username.to_string()));
                return None;
            }
            Err(err) => {
                log_auth_failure(&err);
                return None;
            }
        };

        let roles = self.role_lookup_enabled().then_some(record.roles);
        Some(Principal::new(
            record.username,
            record.stored_credential,
            roles,
        ))
    }

    /// Stored credential for `username`, if the user exists and has one.
    pub fn credentials_for(&self, username: &str) -> Option<String> {
        match self.fetch(username) {
            Ok(LookupOutcome::Found(record)) => record.stored_credential,
            Ok(LookupOutcome::NotFound) => {
                log_auth_failure(&AuthError::RecordNotFound(username.to_string()));
                None
            }
            Err(err) => {
                log_auth_failure(&err);
                None
            }
        }
    }

    /// Roles held by `username`; `None` when role resolution is disabled.
    ///
    /// A missing user or an unavailable store yields an empty list.
    pub fn roles_for(&self, username: &str) -> Option<Vec<String>> {
        if !self.role_lookup_enabled() {
            // Authentication only, no role store to look in
            return None;
        }

        match self.fetch(username) {
            Ok(LookupOutcome::Found(record)) => Some(record.roles),
            Ok(LookupOutcome::NotFound) => {
                warn!("Roles for {} could not be located", username);
                Some(Vec::new())
            }
            Err(err) => {
                error!("Role lookup failed for {}: {}", username, err);
                Some(Vec::new())
            }
        }
    }

    fn role_lookup_enabled(&self) -> bool {
        should_resolve_roles(
            self.config.roles_mode,
            self.config.roles_field.is_some(),
            self.config.role_name_field.is_some(),
        )
    }

    fn fetch(&self, username: &str) -> Result<LookupOutcome, AuthError> {
        let unavailable = |source: StoreError| AuthError::StoreUnavailable {
            uri: self.connection.uri().to_string(),
            source,
        };

        let handle = self.connection.acquire().map_err(unavailable)?;
        find_by_username(&*handle, &self.config, username).map_err(unavailable)
    }
}
