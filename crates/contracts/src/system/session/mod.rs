//! The single owner of the logged-in session.
//!
//! Every mutator builds the updated session, writes it through the
//! repository, and only then replaces the in-memory copy. A failed write
//! leaves both memory and storage at the previous state.

pub mod repository;

use chrono::Utc;
use thiserror::Error;

use crate::shared::config::SessionConfig;
use crate::system::auth::referral::generate_referral_code;
use crate::system::auth::{ConnectedGstin, ProfileDetails, RegistrationData, Role, UserSession};
use repository::{KeyValueStore, SessionRepository, StorageError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no active session")]
    NoSession,
    #[error("insufficient credits: balance {balance}, requested {requested}")]
    InsufficientCredits { balance: u32, requested: u32 },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    repository: SessionRepository<S>,
    config: SessionConfig,
    current: Option<UserSession>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Opens the store and restores the current session, if one was persisted.
    pub fn open(store: S, config: SessionConfig) -> Self {
        let repository = SessionRepository::new(store);
        let current = match repository.current() {
            Ok(current) => current,
            Err(e) => {
                log::warn!("Discarding unreadable current session: {}", e);
                None
            }
        };
        Self {
            repository,
            config,
            current,
        }
    }

    pub fn user(&self) -> Option<&UserSession> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn repository(&self) -> &SessionRepository<S> {
        &self.repository
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Logs in by identifier. A known identifier restores its persisted
    /// session as-is; an unknown one gets a fresh session with the starting
    /// credit grant. There is no credential check.
    pub fn login(
        &mut self,
        identifier: &str,
        role: Role,
        referral_code: Option<&str>,
        registration: Option<RegistrationData>,
    ) -> Result<&UserSession, SessionError> {
        let existing = match self.repository.find(identifier) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("Replacing unreadable record for {}: {}", identifier, e);
                None
            }
        };

        let session = match existing {
            Some(session) => {
                log::info!("Restored session for {}", identifier);
                self.repository.set_current(&session)?;
                session
            }
            None => {
                let session = self.new_session(identifier, role, referral_code, registration);
                log::info!(
                    "Created {} session for {} ({} plan)",
                    session.role.as_str(),
                    identifier,
                    session.user_type
                );
                self.repository.save(&session)?;
                session
            }
        };

        Ok(self.current.insert(session))
    }

    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.repository.clear_current()?;
        if let Some(session) = self.current.take() {
            log::info!("Logged out {}", session.phone_number);
        }
        Ok(())
    }

    /// Returns the new balance.
    pub fn add_credits(&mut self, amount: u32) -> Result<u32, SessionError> {
        let session = self.commit(|s| {
            s.credits = s.credits.saturating_add(amount);
            Ok(())
        })?;
        Ok(session.credits)
    }

    /// Returns the new balance, or `InsufficientCredits` without touching
    /// the session when the balance is below `amount`.
    pub fn deduct_credits(&mut self, amount: u32) -> Result<u32, SessionError> {
        let session = self.commit(|s| {
            if s.credits < amount {
                return Err(SessionError::InsufficientCredits {
                    balance: s.credits,
                    requested: amount,
                });
            }
            s.credits -= amount;
            Ok(())
        })?;
        log::debug!("Deducted {} credit(s), balance {}", amount, session.credits);
        Ok(session.credits)
    }

    /// Appends a GSTIN. Plan limits are enforced by the caller.
    pub fn connect_gstin(&mut self, gstin: &str, name: &str) -> Result<ConnectedGstin, SessionError> {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        let session = self.commit(|s| {
            let id = s
                .connected_gstins
                .iter()
                .map(|g| g.id + 1)
                .max()
                .map_or(now, |next| next.max(now));
            s.connected_gstins.push(ConnectedGstin {
                id,
                gstin: gstin.to_string(),
                name: name.to_string(),
            });
            Ok(())
        })?;
        let added = session
            .connected_gstins
            .last()
            .cloned()
            .ok_or(SessionError::NoSession)?;
        log::info!("Connected GSTIN {} as '{}'", added.gstin, added.name);
        Ok(added)
    }

    pub fn complete_profile(&mut self, details: ProfileDetails) -> Result<&UserSession, SessionError> {
        self.commit(|s| {
            s.name = details.name;
            s.email = details.email;
            s.company_name = details.company_name;
            s.user_type = details.user_type;
            s.is_profile_complete = true;
            Ok(())
        })
    }

    pub fn tour_completed(&self) -> bool {
        self.repository.tour_completed().unwrap_or_else(|e| {
            log::warn!("Cannot read onboarding flag: {}", e);
            false
        })
    }

    pub fn mark_tour_completed(&mut self) -> Result<(), SessionError> {
        self.repository.set_tour_completed()?;
        Ok(())
    }

    fn commit<F>(&mut self, change: F) -> Result<&UserSession, SessionError>
    where
        F: FnOnce(&mut UserSession) -> Result<(), SessionError>,
    {
        let mut updated = self.current.clone().ok_or(SessionError::NoSession)?;
        change(&mut updated)?;
        self.repository.save(&updated)?;
        Ok(self.current.insert(updated))
    }

    fn new_session(
        &self,
        identifier: &str,
        role: Role,
        referral_code: Option<&str>,
        registration: Option<RegistrationData>,
    ) -> UserSession {
        let registration = registration.unwrap_or_default();
        let name = if registration.name.trim().is_empty() {
            "User".to_string()
        } else {
            registration.name
        };
        UserSession {
            name,
            email: registration.email,
            company_name: registration.company_name,
            user_type: registration.user_type,
            role,
            phone_number: identifier.to_string(),
            credits: self.config.starting_credits,
            referral_code: generate_referral_code(&self.config.referral_prefix),
            referred_by: referral_code.map(str::to_string),
            is_profile_complete: true,
            connected_gstins: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::repository::MemoryStore;
    use super::*;
    use crate::system::auth::referral::is_referral_code;
    use crate::system::auth::PlanTier;

    fn open() -> SessionStore<MemoryStore> {
        SessionStore::open(MemoryStore::new(), SessionConfig::default())
    }

    fn logged_in(credits: u32) -> SessionStore<MemoryStore> {
        let mut store = open();
        store.login("9876543210", Role::User, None, None).unwrap();
        if credits > 5 {
            store.add_credits(credits - 5).unwrap();
        } else if credits < 5 {
            store.deduct_credits(5 - credits).unwrap();
        }
        store
    }

    #[test]
    fn test_new_identifier_gets_starting_grant() {
        let mut store = open();
        let session = store.login("9876543210", Role::User, None, None).unwrap();

        assert_eq!(session.credits, 5);
        assert!(is_referral_code(&session.referral_code, "PIN-"));
        assert_eq!(session.user_type, PlanTier::Individual);
        assert_eq!(session.name, "User");
        assert!(session.connected_gstins.is_empty());
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_registration_data_sets_plan_and_identity() {
        let mut store = open();
        let registration = RegistrationData {
            name: "Kiran Patel".into(),
            email: "kiran@example.com".into(),
            company_name: "Patel & Co".into(),
            user_type: PlanTier::Ca,
            referral_code: "PIN-FRND1".into(),
        };
        let session = store
            .login("9000000001", Role::User, Some("PIN-FRND1"), Some(registration))
            .unwrap();

        assert_eq!(session.user_type, PlanTier::Ca);
        assert_eq!(session.name, "Kiran Patel");
        assert_eq!(session.referred_by.as_deref(), Some("PIN-FRND1"));
    }

    #[test]
    fn test_known_identifier_restores_persisted_session() {
        let mut store = open();
        store.login("9876543210", Role::User, None, None).unwrap();
        store.add_credits(10).unwrap();
        store.connect_gstin("27AABCZ1234N1Z2", "Primary Business").unwrap();
        let before = store.user().cloned().unwrap();
        store.logout().unwrap();
        assert!(!store.is_authenticated());

        let registration = RegistrationData {
            user_type: PlanTier::Ca,
            ..Default::default()
        };
        let after = store
            .login("9876543210", Role::Admin, None, Some(registration))
            .unwrap();
        assert_eq!(after, &before);
        assert_eq!(after.credits, 15);
    }

    #[test]
    fn test_reopen_restores_current_session() {
        let mut store = open();
        store.login("9876543210", Role::User, None, None).unwrap();
        let storage = store.repository().store().clone();

        let reopened = SessionStore::open(storage, SessionConfig::default());
        assert_eq!(reopened.user(), store.user());
    }

    #[test]
    fn test_deduct_with_insufficient_balance_is_rejected() {
        let mut store = logged_in(2);
        let err = store.deduct_credits(3).unwrap_err();

        assert!(matches!(
            err,
            SessionError::InsufficientCredits { balance: 2, requested: 3 }
        ));
        assert_eq!(store.user().unwrap().credits, 2);
        let persisted = store.repository().find("9876543210").unwrap().unwrap();
        assert_eq!(persisted.credits, 2);
    }

    #[test]
    fn test_deduct_decreases_by_exact_amount_and_persists() {
        let mut store = logged_in(5);
        assert_eq!(store.deduct_credits(5).unwrap(), 0);
        assert_eq!(store.user().unwrap().credits, 0);
        assert_eq!(store.repository().current().unwrap().unwrap().credits, 0);
        assert_eq!(store.repository().find("9876543210").unwrap().unwrap().credits, 0);
        assert!(store.deduct_credits(1).is_err());
    }

    #[test]
    fn test_mutators_require_session() {
        let mut store = open();
        assert!(matches!(store.add_credits(1), Err(SessionError::NoSession)));
        assert!(matches!(store.deduct_credits(1), Err(SessionError::NoSession)));
        assert!(matches!(
            store.connect_gstin("27AABCZ1234N1Z2", "x"),
            Err(SessionError::NoSession)
        ));
    }

    #[test]
    fn test_connect_gstin_appends_with_unique_ids() {
        let mut store = logged_in(5);
        let first = store.connect_gstin("27AABCZ1234N1Z2", "Primary Business").unwrap();
        let second = store.connect_gstin("27ZYXWJ5678Q1Z5", "Branch").unwrap();

        let session = store.user().unwrap();
        assert_eq!(session.connected_gstins.len(), 2);
        assert_ne!(first.id, second.id);
        assert_eq!(session.connected_gstins[1], second);
        let persisted = store.repository().find("9876543210").unwrap().unwrap();
        assert_eq!(persisted.connected_gstins.len(), 2);
    }

    #[test]
    fn test_complete_profile_merges_fields() {
        let mut store = logged_in(5);
        let session = store
            .complete_profile(ProfileDetails {
                name: "Meera Iyer".into(),
                email: "meera@example.com".into(),
                company_name: "Iyer Exports".into(),
                user_type: PlanTier::Business,
            })
            .unwrap();

        assert_eq!(session.name, "Meera Iyer");
        assert_eq!(session.user_type, PlanTier::Business);
        assert_eq!(session.credits, 5);
        assert!(session.is_profile_complete);
    }

    #[test]
    fn test_corrupt_record_is_replaced_on_login() {
        use super::repository::KeyValueStore;
        let mut storage = MemoryStore::new();
        storage.set_item("user_9876543210", "garbage").unwrap();
        storage.set_item("user", "garbage").unwrap();

        let mut store = SessionStore::open(storage, SessionConfig::default());
        assert!(!store.is_authenticated());
        let session = store.login("9876543210", Role::User, None, None).unwrap();
        assert_eq!(session.credits, 5);
    }

    #[test]
    fn test_tour_flag_survives_logout() {
        let mut store = logged_in(5);
        assert!(!store.tour_completed());
        store.mark_tour_completed().unwrap();
        store.logout().unwrap();
        assert!(store.tour_completed());
    }
}
