use contracts::shared::config::AppConfig;
use contracts::system::access::{capabilities, CapabilitySet, Capability};
use contracts::system::auth::{PendingLogin, ProfileDetails, Role, UserSession};
use contracts::system::session::{SessionError, SessionStore};
use leptos::prelude::*;

use super::storage::BrowserStorage;

/// Reactive wrapper around the session store. Reading any accessor inside a
/// view subscribes to session changes.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub store: RwSignal<SessionStore<BrowserStorage>>,
}

impl SessionContext {
    pub fn open(config: &AppConfig) -> Self {
        let store = SessionStore::open(BrowserStorage, config.session.clone());
        if let Some(user) = store.user() {
            log::info!("Resumed session for {}", user.phone_number);
        }
        Self {
            store: RwSignal::new(store),
        }
    }

    pub fn user(&self) -> Option<UserSession> {
        self.store.with(|s| s.user().cloned())
    }

    pub fn user_untracked(&self) -> Option<UserSession> {
        self.store.with_untracked(|s| s.user().cloned())
    }

    pub fn is_admin(&self) -> bool {
        self.store.with(|s| s.user().is_some_and(UserSession::is_admin))
    }

    /// Empty set when logged out.
    pub fn capabilities(&self) -> CapabilitySet {
        self.store.with(|s| {
            s.user()
                .map(|u| capabilities(u.user_type, u.role))
                .unwrap_or_default()
        })
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities().has(capability)
    }

    pub fn has_untracked(&self, capability: Capability) -> bool {
        self.store.with_untracked(|s| {
            s.user()
                .is_some_and(|u| capabilities(u.user_type, u.role).has(capability))
        })
    }

    /// Runs a store mutation and notifies subscribers.
    pub fn mutate<T>(
        &self,
        f: impl FnOnce(&mut SessionStore<BrowserStorage>) -> Result<T, SessionError>,
    ) -> Result<T, SessionError> {
        let result = self
            .store
            .try_update(f)
            .unwrap_or(Err(SessionError::NoSession));
        if let Err(e) = &result {
            log::warn!("Session update failed: {e}");
        }
        result
    }

    pub fn login(&self, pending: PendingLogin, role: Role) -> Result<UserSession, SessionError> {
        self.mutate(|s| {
            s.login(
                &pending.phone_number,
                role,
                pending.referral_code.as_deref(),
                pending.registration,
            )
            .cloned()
        })
    }

    pub fn logout(&self) {
        let _ = self.mutate(|s| s.logout());
    }

    pub fn complete_profile(&self, details: ProfileDetails) -> Result<UserSession, SessionError> {
        self.mutate(|s| s.complete_profile(details).cloned())
    }

    pub fn tour_completed(&self) -> bool {
        self.store.with_untracked(|s| s.tour_completed())
    }

    pub fn mark_tour_completed(&self) {
        let _ = self.mutate(|s| s.mark_tour_completed());
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
