//! Linking another GSTIN: username, then OTP, then verify.
//!
//! The plan limit is checked before the session is touched; at the limit the
//! caller gets the capability to upsell instead.

use crate::shared::config::PlanLimits;
use crate::system::access::{gstin_limit, upgrade_feature_for_limit, Capability, GstinLimit};
use crate::system::auth::ConnectedGstin;
use crate::system::session::repository::KeyValueStore;
use crate::system::session::{SessionError, SessionStore};

/// Length of a GSTIN; a code of this length is treated as a GSTIN rather
/// than a portal username.
pub const GSTIN_LENGTH: usize = 15;

/// Display name stored with a freshly connected code.
pub fn display_name(code: &str) -> String {
    if code.chars().count() == GSTIN_LENGTH {
        "Primary Business".to_string()
    } else {
        code.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected(ConnectedGstin),
    UpgradeRequired(Capability),
}

/// Remaining room for the session's plan.
pub fn limit_for<S: KeyValueStore>(
    store: &SessionStore<S>,
    limits: &PlanLimits,
) -> Result<(GstinLimit, usize), SessionError> {
    let session = store.user().ok_or(SessionError::NoSession)?;
    Ok((
        gstin_limit(session.user_type, limits),
        session.connected_gstins.len(),
    ))
}

pub fn connect_within_limit<S: KeyValueStore>(
    store: &mut SessionStore<S>,
    limits: &PlanLimits,
    code: &str,
) -> Result<ConnectOutcome, SessionError> {
    let (limit, connected) = limit_for(store, limits)?;
    if !limit.allows(connected) {
        let plan = store.user().map(|s| s.user_type).unwrap_or_default();
        log::info!("GSTIN limit reached ({connected}) for {plan} plan");
        return Ok(ConnectOutcome::UpgradeRequired(upgrade_feature_for_limit(plan)));
    }
    let code = code.trim().to_uppercase();
    let added = store.connect_gstin(&code, &display_name(&code))?;
    Ok(ConnectOutcome::Connected(added))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectStep {
    #[default]
    Username,
    Otp,
}

/// Form state of the connect card. The OTP cells live in their own entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConnectForm {
    pub step: ConnectStep,
    pub username: String,
}

impl ConnectForm {
    /// Uppercased as typed.
    pub fn set_username(&mut self, value: &str) {
        self.username = value.to_uppercase();
    }

    /// Moves to the OTP step; a blank username keeps the form where it is.
    pub fn send_otp(&mut self) -> bool {
        if self.username.trim().is_empty() {
            return false;
        }
        self.step = ConnectStep::Otp;
        true
    }

    pub fn back(&mut self) {
        self.step = ConnectStep::Username;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::SessionConfig;
    use crate::system::auth::{PlanTier, RegistrationData, Role};
    use crate::system::session::repository::MemoryStore;

    const LIMITS: PlanLimits = PlanLimits {
        individual_gstins: 1,
        business_gstins: 5,
    };

    fn store_with_plan(plan: PlanTier) -> SessionStore<MemoryStore> {
        let mut store = SessionStore::open(MemoryStore::new(), SessionConfig::default());
        let registration = RegistrationData {
            user_type: plan,
            ..Default::default()
        };
        store
            .login("9876543210", Role::User, None, Some(registration))
            .unwrap();
        store
    }

    #[test]
    fn test_display_name_heuristic() {
        assert_eq!(display_name("27AABCZ1234N1Z2"), "Primary Business");
        assert_eq!(display_name("ACME_PORTAL"), "ACME_PORTAL");
    }

    #[test]
    fn test_below_limit_adds_exactly_one() {
        let mut store = store_with_plan(PlanTier::Individual);
        let outcome = connect_within_limit(&mut store, &LIMITS, "27aabcz1234n1z2").unwrap();

        let ConnectOutcome::Connected(added) = outcome else {
            panic!("expected a connection");
        };
        assert_eq!(added.gstin, "27AABCZ1234N1Z2");
        assert_eq!(added.name, "Primary Business");
        assert_eq!(store.user().unwrap().connected_gstins, vec![added]);
    }

    #[test]
    fn test_at_limit_leaves_session_untouched() {
        let mut store = store_with_plan(PlanTier::Individual);
        connect_within_limit(&mut store, &LIMITS, "27AABCZ1234N1Z2").unwrap();
        let before = store.user().cloned();

        let outcome = connect_within_limit(&mut store, &LIMITS, "27ZYXWJ5678Q1Z5").unwrap();
        assert_eq!(outcome, ConnectOutcome::UpgradeRequired(Capability::MultipleGstins));
        assert_eq!(store.user().cloned(), before);
    }

    #[test]
    fn test_business_limit_upsells_unlimited() {
        let mut store = store_with_plan(PlanTier::Business);
        for i in 0..5 {
            let outcome = connect_within_limit(&mut store, &LIMITS, &format!("USER{i}")).unwrap();
            assert!(matches!(outcome, ConnectOutcome::Connected(_)));
        }
        let ids: std::collections::HashSet<_> = store
            .user()
            .unwrap()
            .connected_gstins
            .iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(ids.len(), 5);
        assert_eq!(
            connect_within_limit(&mut store, &LIMITS, "USER5").unwrap(),
            ConnectOutcome::UpgradeRequired(Capability::UnlimitedGstins)
        );
    }

    #[test]
    fn test_form_steps() {
        let mut form = ConnectForm::default();
        assert!(!form.send_otp());
        form.set_username("27abcde1234f1z5");
        assert_eq!(form.username, "27ABCDE1234F1Z5");
        assert!(form.send_otp());
        assert_eq!(form.step, ConnectStep::Otp);
        form.back();
        assert_eq!(form.step, ConnectStep::Username);
        form.reset();
        assert!(form.username.is_empty());
    }
}
