//! Keyed session table on top of a string key/value store.
//!
//! Layout:
//! - `user_<identifier>` holds the full session of every identity seen so far
//! - `user` holds the session that is currently logged in
//! - `tourCompleted` is `"true"` once the onboarding tour was finished or skipped

use std::collections::HashMap;
use thiserror::Error;

use crate::system::auth::UserSession;

const CURRENT_KEY: &str = "user";
const RECORD_PREFIX: &str = "user_";
const TOUR_COMPLETED_KEY: &str = "tourCompleted";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("browser storage is not available")]
    Unavailable,
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("stored record `{key}` is not a valid session")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize session")]
    Serialize(#[source] serde_json::Error),
}

/// Minimal string storage. `window.localStorage` in the browser,
/// [`MemoryStore`] in tests.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

fn record_key(identifier: &str) -> String {
    format!("{RECORD_PREFIX}{identifier}")
}

/// Session records keyed by login identifier plus the current-session pointer.
#[derive(Debug, Clone)]
pub struct SessionRepository<S> {
    store: S,
}

impl<S: KeyValueStore> SessionRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn find(&self, identifier: &str) -> Result<Option<UserSession>, StorageError> {
        self.read(&record_key(identifier))
    }

    pub fn current(&self) -> Result<Option<UserSession>, StorageError> {
        self.read(CURRENT_KEY)
    }

    /// Writes the session under its identifier and as the current session.
    pub fn save(&mut self, session: &UserSession) -> Result<(), StorageError> {
        let json = serde_json::to_string(session).map_err(StorageError::Serialize)?;
        self.store.set_item(CURRENT_KEY, &json)?;
        self.store.set_item(&record_key(&session.phone_number), &json)
    }

    /// Points the current-session key at an existing record without rewriting it.
    pub fn set_current(&mut self, session: &UserSession) -> Result<(), StorageError> {
        let json = serde_json::to_string(session).map_err(StorageError::Serialize)?;
        self.store.set_item(CURRENT_KEY, &json)
    }

    pub fn clear_current(&mut self) -> Result<(), StorageError> {
        self.store.remove_item(CURRENT_KEY)
    }

    pub fn tour_completed(&self) -> Result<bool, StorageError> {
        Ok(self
            .store
            .get_item(TOUR_COMPLETED_KEY)?
            .is_some_and(|v| v == "true"))
    }

    pub fn set_tour_completed(&mut self) -> Result<(), StorageError> {
        self.store.set_item(TOUR_COMPLETED_KEY, "true")
    }

    fn read(&self, key: &str) -> Result<Option<UserSession>, StorageError> {
        match self.store.get_item(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StorageError::Corrupt {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::{PlanTier, Role};

    fn session(phone: &str) -> UserSession {
        UserSession {
            name: "User".into(),
            email: String::new(),
            company_name: String::new(),
            user_type: PlanTier::Individual,
            role: Role::User,
            phone_number: phone.into(),
            credits: 5,
            referral_code: "PIN-AAAAA".into(),
            referred_by: None,
            is_profile_complete: true,
            connected_gstins: vec![],
        }
    }

    #[test]
    fn test_save_writes_record_and_pointer() {
        let mut repo = SessionRepository::new(MemoryStore::new());
        repo.save(&session("9876543210")).unwrap();

        assert_eq!(repo.store().len(), 2);
        assert!(repo.store().get_item("user_9876543210").unwrap().is_some());
        assert_eq!(
            repo.current().unwrap().map(|s| s.phone_number),
            Some("9876543210".to_string())
        );
    }

    #[test]
    fn test_clear_current_keeps_record() {
        let mut repo = SessionRepository::new(MemoryStore::new());
        repo.save(&session("9876543210")).unwrap();
        repo.clear_current().unwrap();

        assert!(repo.current().unwrap().is_none());
        assert!(repo.find("9876543210").unwrap().is_some());
        assert!(repo.find("1111111111").unwrap().is_none());
    }

    #[test]
    fn test_corrupt_record_is_reported() {
        let mut store = MemoryStore::new();
        store.set_item("user", "{not json").unwrap();
        let repo = SessionRepository::new(store);

        match repo.current() {
            Err(StorageError::Corrupt { key, .. }) => assert_eq!(key, "user"),
            other => panic!("expected corrupt error, got {other:?}"),
        }
    }

    #[test]
    fn test_tour_flag() {
        let mut repo = SessionRepository::new(MemoryStore::new());
        assert!(!repo.tour_completed().unwrap());
        repo.set_tour_completed().unwrap();
        assert!(repo.tour_completed().unwrap());
    }
}
