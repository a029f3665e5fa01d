//! Credential store - institution access tokens on disk

use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};
use crate::domain::{Credential, EnrollmentPayload};

use super::{load_json, save_json};

/// On-disk wrapper for the credential list
#[derive(Debug, Default, Serialize, Deserialize)]
struct CredentialFile {
    tokens: Vec<Credential>,
}

/// File-backed credential collection, keyed uniquely by access token.
///
/// `list` returns records with their secrets intact; redaction before
/// external exposure is the consumer's responsibility.
pub struct CredentialStore {
    path: PathBuf,
    tokens: RwLock<Vec<Credential>>,
}

impl CredentialStore {
    /// Open the store at `path`. A missing file starts the store empty;
    /// a malformed file is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = load_json::<CredentialFile>(&path)?.unwrap_or_default();
        Ok(Self {
            path,
            tokens: RwLock::new(file.tokens),
        })
    }

    /// Upsert keyed by exact access token: a re-submitted token has its
    /// metadata refreshed in place (`created_at` preserved, `last_updated`
    /// bumped); an unknown token is appended with both timestamps set now.
    pub fn store(&self, mut record: Credential) -> Result<Credential> {
        let now = Utc::now();
        let mut tokens = self.write();

        if let Some(existing) = tokens
            .iter_mut()
            .find(|c| c.access_token == record.access_token)
        {
            record.created_at = existing.created_at;
            record.last_updated = now;
            *existing = record.clone();
        } else {
            record.created_at = now;
            record.last_updated = now;
            tokens.push(record.clone());
        }

        self.save(&tokens)?;
        Ok(record)
    }

    /// Adapt a raw enrollment payload and store the resulting credential.
    /// Nothing is stored when adaptation fails.
    pub fn store_from_enrollment(&self, payload: EnrollmentPayload) -> Result<Credential> {
        let credential = payload.into_credential()?;
        self.store(credential)
    }

    /// Full record for an exact access token
    pub fn get(&self, access_token: &str) -> Option<Credential> {
        self.read()
            .iter()
            .find(|c| c.access_token == access_token)
            .cloned()
    }

    /// First token stored for the institution, matched case-insensitively
    pub fn get_by_institution(&self, institution_name: &str) -> Option<String> {
        let wanted = institution_name.to_lowercase();
        self.read()
            .iter()
            .find(|c| c.institution_name.to_lowercase() == wanted)
            .map(|c| c.access_token.clone())
    }

    /// Remove the record matching the access token
    pub fn delete(&self, access_token: &str) -> Result<()> {
        let mut tokens = self.write();

        let before = tokens.len();
        tokens.retain(|c| c.access_token != access_token);
        if tokens.len() == before {
            return Err(Error::not_found("credential for access token"));
        }

        self.save(&tokens)
    }

    /// Remove every stored credential
    pub fn delete_all(&self) -> Result<()> {
        let mut tokens = self.write();
        tokens.clear();
        self.save(&tokens)
    }

    /// All records, secrets included
    pub fn list(&self) -> Vec<Credential> {
        self.read().clone()
    }

    fn save(&self, tokens: &[Credential]) -> Result<()> {
        save_json(
            &self.path,
            &CredentialFile {
                tokens: tokens.to_vec(),
            },
        )
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Credential>> {
        self.tokens.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Credential>> {
        self.tokens.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(token: &str, institution: &str) -> Credential {
        let now = Utc::now();
        Credential {
            access_token: token.to_string(),
            institution_name: institution.to_string(),
            institution_id: None,
            user_id: None,
            enrollment_id: None,
            signature: None,
            created_at: now,
            last_updated: now,
        }
    }

    #[test]
    fn test_store_and_lookup_by_institution() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tokens.json");
        let store = CredentialStore::open(&path).unwrap();

        store.store(record("token_abc", "Chase")).unwrap();

        // Case-insensitive secondary key
        assert_eq!(
            store.get_by_institution("chase"),
            Some("token_abc".to_string())
        );
        assert_eq!(store.get_by_institution("CHASE"), Some("token_abc".to_string()));
        assert!(store.get_by_institution("Citi").is_none());

        // Survives reopen
        let reopened = CredentialStore::open(&path).unwrap();
        assert_eq!(reopened.list().len(), 1);
    }

    #[test]
    fn test_resubmitted_token_refreshes_in_place() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::open(dir.path().join("tokens.json")).unwrap();

        let first = store.store(record("token_abc", "Chase")).unwrap();
        let second = store.store(record("token_abc", "Chase Bank")).unwrap();

        assert_eq!(store.list().len(), 1);
        assert_eq!(second.institution_name, "Chase Bank");
        assert_eq!(second.created_at, first.created_at);
        assert!(second.last_updated >= first.last_updated);
    }

    #[test]
    fn test_store_from_enrollment_missing_token_stores_nothing() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::open(dir.path().join("tokens.json")).unwrap();

        let payload: EnrollmentPayload =
            serde_json::from_str(r#"{"user": {"id": "usr_1"}}"#).unwrap();
        assert!(store.store_from_enrollment(payload).is_err());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_store_from_enrollment_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::open(dir.path().join("tokens.json")).unwrap();

        let payload: EnrollmentPayload = serde_json::from_str(
            r#"{"accessToken": "token_abc",
                "enrollment": {"institution": {"name": "Chase"}}}"#,
        )
        .unwrap();
        let cred = store.store_from_enrollment(payload).unwrap();
        assert_eq!(cred.institution_name, "Chase");
        assert_eq!(store.get("token_abc").unwrap().access_token, "token_abc");
    }

    #[test]
    fn test_delete_unknown_token_fails() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::open(dir.path().join("tokens.json")).unwrap();

        assert!(matches!(
            store.delete("missing").unwrap_err(),
            Error::NotFound(_)
        ));
    }

    #[test]
    fn test_delete_all_clears_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tokens.json");
        let store = CredentialStore::open(&path).unwrap();

        store.store(record("token_a", "Chase")).unwrap();
        store.store(record("token_b", "Citi")).unwrap();
        store.delete_all().unwrap();

        assert!(store.list().is_empty());
        assert!(CredentialStore::open(&path).unwrap().list().is_empty());
    }
}
