//! Header "Generate Report": one credit per report. Only user sessions see the button.

use crate::shared::simulated_task::SimulatedTask;
use crate::system::session::repository::KeyValueStore;
use crate::system::session::{SessionError, SessionStore};

pub const REPORT_COST: u32 = 1;
pub const SUCCESS_MESSAGE: &str = "Report generated successfully!";
pub const INSUFFICIENT_CREDITS_MESSAGE: &str =
    "Insufficient credits! Please refer friends or upgrade to generate more reports.";

pub fn report_task(delay_ms: u32) -> SimulatedTask {
    SimulatedTask::new("Report generation", delay_ms)
}

/// Charges the session for one report before generation starts.
/// Returns the remaining balance.
pub fn charge_report<S: KeyValueStore>(store: &mut SessionStore<S>) -> Result<u32, SessionError> {
    store.deduct_credits(REPORT_COST)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::SessionConfig;
    use crate::system::auth::Role;
    use crate::system::session::repository::MemoryStore;

    fn store() -> SessionStore<MemoryStore> {
        let mut store = SessionStore::open(MemoryStore::new(), SessionConfig::default());
        store.login("9000000000", Role::User, None, None).unwrap();
        store
    }

    #[test]
    fn test_user_pays_one_credit_until_empty() {
        let mut store = store();
        for expected in (0..5).rev() {
            assert_eq!(charge_report(&mut store).unwrap(), expected);
        }
        assert!(matches!(
            charge_report(&mut store),
            Err(SessionError::InsufficientCredits { balance: 0, requested: 1 })
        ));
    }

    #[test]
    fn test_charge_without_session_fails() {
        let mut store = SessionStore::open(MemoryStore::new(), SessionConfig::default());
        assert!(matches!(charge_report(&mut store), Err(SessionError::NoSession)));
    }
}
