//! User lookup operations
//!
//! All knowledge of the user document shape lives here: the configured field
//! names are applied to a generic document to produce a [`UserRecord`].

use log::debug;

use super::record::UserRecord;
use super::results::LookupOutcome;
use crate::config::RealmConfig;
use crate::error::StoreError;
use crate::store::{Document, DocumentStore};

/// Query the user collection for `username`.
pub fn find_by_username(
    store: &dyn DocumentStore,
    config: &RealmConfig,
    username: &str,
) -> Result<LookupOutcome, StoreError> {
    let document = store.find_one(&config.user_collection, &config.username_field, username)?;

    match document {
        Some(document) => Ok(LookupOutcome::Found(decode_user(config, username, &document))),
        None => {
            debug!("No {} document for {}", config.user_collection, username);
            Ok(LookupOutcome::NotFound)
        }
    }
}

/// Project a user document onto a [`UserRecord`].
///
/// A credential that is missing or not a string is absent. Role data that is
/// missing or not shaped as expected yields no roles.
pub fn decode_user(config: &RealmConfig, username: &str, document: &Document) -> UserRecord {
    let stored_credential = document
        .get(&config.credentials_field)
        .and_then(Document::as_str)
        .map(str::to_string);

    UserRecord {
        username: username.to_string(),
        stored_credential,
        roles: decode_roles(config, document),
    }
}

fn decode_roles(config: &RealmConfig, document: &Document) -> Vec<String> {
    let Some(roles_field) = config.roles_field.as_deref() else {
        return Vec::new();
    };

    let Some(entries) = document.get(roles_field).and_then(Document::as_array) else {
        // TODO: surface a malformed roles field to operators instead of silently granting no roles
        if document.get(roles_field).is_some_and(|v| !v.is_null()) {
            debug!("Ignoring non-list roles field {}", roles_field);
        }
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match config.role_name_field.as_deref() {
            Some(name_field) => entry.get(name_field).and_then(Document::as_str),
            None => entry.as_str(),
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn alice() -> Document {
        json!({
            "username": "alice",
            "credentials": "pw123",
            "roles": [ { "name": "admin" }, { "name": "user" } ]
        })
    }

    #[test]
    fn decodes_credential_and_roles() {
        let record = decode_user(&RealmConfig::default(), "alice", &alice());
        assert_eq!(record.username, "alice");
        assert_eq!(record.stored_credential.as_deref(), Some("pw123"));
        assert_eq!(record.roles, vec!["admin", "user"]);
    }

    #[test]
    fn null_or_missing_credential_is_absent() {
        let config = RealmConfig::default();
        let null = json!({ "username": "x", "credentials": null });
        let number = json!({ "username": "x", "credentials": 42 });
        assert!(decode_user(&config, "x", &null).stored_credential.is_none());
        assert!(decode_user(&config, "x", &number).stored_credential.is_none());
        assert!(decode_user(&config, "x", &json!({})).stored_credential.is_none());
    }

    #[test]
    fn malformed_roles_mean_no_roles() {
        let config = RealmConfig::default();
        for roles in [json!(null), json!("admin"), json!({ "name": "admin" }), json!(7)] {
            let doc = json!({ "username": "x", "roles": roles });
            assert!(decode_user(&config, "x", &doc).roles.is_empty());
        }
        assert!(decode_user(&config, "x", &json!({ "username": "x" })).roles.is_empty());
    }

    #[test]
    fn role_entries_without_a_name_are_skipped() {
        let doc = json!({
            "roles": [ { "name": "admin" }, { "title": "ops" }, "loose", { "name": 5 }, { "name": "user" } ]
        });
        let record = decode_user(&RealmConfig::default(), "x", &doc);
        assert_eq!(record.roles, vec!["admin", "user"]);
    }

    #[test]
    fn uses_configured_field_names() {
        let config = RealmConfig {
            credentials_field: "hash".into(),
            roles_field: Some("groups".into()),
            role_name_field: Some("title".into()),
            ..RealmConfig::default()
        };
        let doc = json!({ "hash": "abc", "groups": [ { "title": "ops" } ] });
        let record = decode_user(&config, "dave", &doc);
        assert_eq!(record.stored_credential.as_deref(), Some("abc"));
        assert_eq!(record.roles, vec!["ops"]);
    }

    #[test]
    fn plain_string_roles_without_name_field() {
        let config = RealmConfig {
            role_name_field: None,
            ..RealmConfig::default()
        };
        let doc = json!({ "roles": [ "admin", { "name": "user" } ] });
        assert_eq!(decode_user(&config, "x", &doc).roles, vec!["admin"]);
    }

    #[test]
    fn find_by_username_queries_configured_collection() {
        let store = MemoryStore::new();
        store.insert("user", alice());
        let config = RealmConfig::default();

        let found = find_by_username(&store, &config, "alice").unwrap();
        assert_eq!(found.into_record().unwrap().roles.len(), 2);

        let missing = find_by_username(&store, &config, "carol").unwrap();
        assert_eq!(missing, LookupOutcome::NotFound);
    }
}
