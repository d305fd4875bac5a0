//! Configuration management for the Mongo realm
//!
//! Settings are read once at startup from a TOML file with environment
//! overrides and are immutable afterwards.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

use crate::digest::DigestAlgorithm;

/// Environment variable prefix, e.g. `MONGO_REALM_DATABASE`.
pub const ENV_PREFIX: &str = "MONGO_REALM";

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "mongo-realm";

/// How strictly the container expects roles to be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RolesMode {
    #[default]
    Strict,
    AuthOnly,
    StrictAuthOnly,
}

impl RolesMode {
    pub fn is_strict(&self) -> bool {
        matches!(self, RolesMode::Strict)
    }
}

/// Realm configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RealmConfig {
    // ═══ STORE LOCATION ═══
    /// Connection URI of the document store
    pub mongo_client_uri: String,

    /// Database holding the user collection
    pub database: String,

    pub user_collection: String,

    // ═══ DOCUMENT SHAPE ═══
    pub username_field: String,
    pub credentials_field: String,

    /// Field holding the list of role sub-documents; `None` when there is no role store
    pub roles_field: Option<String>,

    /// Field of each role sub-document holding the role name
    pub role_name_field: Option<String>,

    // ═══ POLICY ═══
    pub roles_mode: RolesMode,

    /// Digest applied to presented credentials; plaintext when absent
    pub digest: Option<DigestAlgorithm>,
}

impl Default for RealmConfig {
    fn default() -> Self {
        Self {
            mongo_client_uri: "mongodb://localhost/".to_string(),
            database: "security_realm".to_string(),
            user_collection: "user".to_string(),
            username_field: "username".to_string(),
            credentials_field: "credentials".to_string(),
            roles_field: Some("roles".to_string()),
            role_name_field: Some("name".to_string()),
            roles_mode: RolesMode::Strict,
            digest: None,
        }
    }
}

impl RealmConfig {
    /// Load configuration from `path` (or `mongo-realm.toml` if present) with
    /// `MONGO_REALM_*` environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration from `path` with overrides taken from `env`.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?;

        Self::finish(settings)
    }

    /// Parse configuration from TOML text, without environment overrides.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Self::finish(settings)
    }

    fn finish(settings: Config) -> Result<Self, config::ConfigError> {
        let config: RealmConfig = settings.try_deserialize()?;
        let config = config.normalized();
        config.validate()?;
        Ok(config)
    }

    /// Treat blank role field names as not configured.
    pub fn normalized(mut self) -> Self {
        self.roles_field = self.roles_field.filter(|f| !f.trim().is_empty());
        self.role_name_field = self.role_name_field.filter(|f| !f.trim().is_empty());
        self
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        let required = [
            ("mongo_client_uri", &self.mongo_client_uri),
            ("database", &self.database),
            ("user_collection", &self.user_collection),
            ("username_field", &self.username_field),
            ("credentials_field", &self.credentials_field),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(config::ConfigError::Message(format!(
                    "{key} cannot be empty"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_uses_defaults() {
        let config = RealmConfig::from_toml_str("").unwrap();
        assert_eq!(config.mongo_client_uri, "mongodb://localhost/");
        assert_eq!(config.database, "security_realm");
        assert_eq!(config.user_collection, "user");
        assert_eq!(config.roles_field.as_deref(), Some("roles"));
        assert_eq!(config.role_name_field.as_deref(), Some("name"));
        assert_eq!(config.roles_mode, RolesMode::Strict);
        assert!(config.digest.is_none());
    }

    #[test]
    fn parses_full_file() {
        let config = RealmConfig::from_toml_str(
            r#"
            mongo_client_uri = "mongodb://db.internal:27017/"
            database = "accounts"
            user_collection = "people"
            username_field = "login"
            credentials_field = "hash"
            roles_field = "groups"
            role_name_field = "title"
            roles_mode = "auth_only"
            digest = "SHA-256"
            "#,
        )
        .unwrap();

        assert_eq!(config.database, "accounts");
        assert_eq!(config.username_field, "login");
        assert_eq!(config.roles_field.as_deref(), Some("groups"));
        assert_eq!(config.roles_mode, RolesMode::AuthOnly);
        assert_eq!(config.digest, Some(DigestAlgorithm::Sha256));
    }

    #[test]
    fn blank_role_fields_mean_no_role_store() {
        let config = RealmConfig::from_toml_str(
            r#"
            roles_field = ""
            role_name_field = " "
            "#,
        )
        .unwrap();
        assert!(config.roles_field.is_none());
        assert!(config.role_name_field.is_none());
    }

    #[test]
    fn rejects_empty_database() {
        let err = RealmConfig::from_toml_str(r#"database = """#).unwrap_err();
        assert!(err.to_string().contains("database"));
    }

    #[test]
    fn rejects_unknown_digest() {
        assert!(RealmConfig::from_toml_str(r#"digest = "MD4""#).is_err());
    }

    fn env_vars(vars: &[(&str, &str)]) -> Environment {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(vars))
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("realm.toml");
        std::fs::write(
            &path,
            r#"
            database = "a"
            roles_field = "groups"
            roles_mode = "strict"
            "#,
        )
        .unwrap();

        let env = env_vars(&[
            ("MONGO_REALM_DATABASE", "fromenv"),
            ("MONGO_REALM_ROLES_MODE", "auth_only"),
            ("MONGO_REALM_ROLES_FIELD", ""),
            ("MONGO_REALM_DIGEST", "SHA-512"),
            ("UNRELATED_DATABASE", "ignored"),
        ]);
        let config = RealmConfig::load_with_env(Some(&path), env).unwrap();

        assert_eq!(config.database, "fromenv");
        assert_eq!(config.roles_mode, RolesMode::AuthOnly);
        assert!(config.roles_field.is_none());
        assert_eq!(config.digest, Some(DigestAlgorithm::Sha512));
        assert_eq!(config.role_name_field.as_deref(), Some("name"));
    }

    #[test]
    fn file_values_stand_without_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("realm.toml");
        std::fs::write(&path, r#"database = "a""#).unwrap();

        let config = RealmConfig::load_with_env(Some(&path), env_vars(&[])).unwrap();
        assert_eq!(config.database, "a");
        assert_eq!(config.roles_field.as_deref(), Some("roles"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(RealmConfig::load_with_env(Some(&path), env_vars(&[])).is_err());
    }

    #[test]
    fn only_strict_mode_is_strict() {
        assert!(RolesMode::Strict.is_strict());
        assert!(!RolesMode::AuthOnly.is_strict());
        assert!(!RolesMode::StrictAuthOnly.is_strict());
    }
}
