pub mod otp;
pub mod referral;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::common::UnknownVariant;

/// Role of the logged-in identity. Decides which route subtree is reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// The demo login treats one configured phone number as the administrator.
    pub fn for_phone(phone_number: &str, admin_phone: &str) -> Self {
        if phone_number == admin_phone {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

/// Subscription tier. Ordering is the feature ceiling: `Individual < Business < CA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum PlanTier {
    #[default]
    Individual,
    Business,
    #[serde(rename = "CA")]
    Ca,
}

impl PlanTier {
    pub const ALL: [PlanTier; 3] = [PlanTier::Individual, PlanTier::Business, PlanTier::Ca];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::Individual => "Individual",
            PlanTier::Business => "Business",
            PlanTier::Ca => "CA",
        }
    }
}

impl FromStr for PlanTier {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Individual" => Ok(PlanTier::Individual),
            "Business" => Ok(PlanTier::Business),
            "CA" => Ok(PlanTier::Ca),
            _ => Err(UnknownVariant::new("plan tier", s)),
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A GSTIN linked to the session. Appended only, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedGstin {
    pub id: u64,
    pub gstin: String,
    pub name: String,
}

/// The persisted session object.
///
/// Field names are serialized in camelCase so that records written by
/// earlier builds of the dashboard keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company_name: String,
    pub user_type: PlanTier,
    pub role: Role,
    pub phone_number: String,
    pub credits: u32,
    pub referral_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referred_by: Option<String>,
    pub is_profile_complete: bool,
    #[serde(rename = "connectedGSTINs", default)]
    pub connected_gstins: Vec<ConnectedGstin>,
}

impl UserSession {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Label shown under the avatar: plan for users, role for admins.
    pub fn badge(&self) -> &'static str {
        match self.role {
            Role::Admin => "admin",
            Role::User => self.user_type.as_str(),
        }
    }

    /// Credit label for the header; administrators are not metered.
    pub fn credits_label(&self) -> String {
        match self.role {
            Role::Admin => "Unlimited".to_string(),
            Role::User => format!("{} Credits", self.credits),
        }
    }

    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect();
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials.to_uppercase()
        }
    }
}

/// Sign-up form contents carried from the login page to OTP verification.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationData {
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub user_type: PlanTier,
    pub referral_code: String,
}

/// Fields merged into the session by "complete profile".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetails {
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub user_type: PlanTier,
}

/// Login started on the login page, completed on the OTP page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PendingLogin {
    pub phone_number: String,
    pub referral_code: Option<String>,
    pub registration: Option<RegistrationData>,
}

impl PendingLogin {
    pub fn sign_in(phone_number: String, referral_code: String) -> Self {
        Self {
            phone_number,
            referral_code: non_empty(referral_code),
            registration: None,
        }
    }

    pub fn sign_up(phone_number: String, registration: RegistrationData) -> Self {
        Self {
            phone_number,
            referral_code: non_empty(registration.referral_code.clone()),
            registration: Some(registration),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserSession {
        UserSession {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            company_name: "Rao Traders".into(),
            user_type: PlanTier::Business,
            role: Role::User,
            phone_number: "9876543210".into(),
            credits: 5,
            referral_code: "PIN-AB12C".into(),
            referred_by: None,
            is_profile_complete: true,
            connected_gstins: vec![ConnectedGstin {
                id: 1,
                gstin: "27AABCZ1234N1Z2".into(),
                name: "Primary Business".into(),
            }],
        }
    }

    #[test]
    fn test_plan_ordering_is_feature_ceiling() {
        assert!(PlanTier::Individual < PlanTier::Business);
        assert!(PlanTier::Business < PlanTier::Ca);
    }

    #[test]
    fn test_plan_tier_parses_display_labels() {
        for plan in PlanTier::ALL {
            assert_eq!(plan.to_string().parse::<PlanTier>(), Ok(plan));
        }
        assert!("Enterprise".parse::<PlanTier>().is_err());
    }

    #[test]
    fn test_session_uses_legacy_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["userType"], "Business");
        assert_eq!(json["role"], "user");
        assert_eq!(json["phoneNumber"], "9876543210");
        assert_eq!(json["connectedGSTINs"][0]["gstin"], "27AABCZ1234N1Z2");
        assert!(json.get("referredBy").is_none());
    }

    #[test]
    fn test_session_without_optional_fields_loads() {
        let raw = r#"{"name":"User","email":"","userType":"CA","role":"admin",
            "phoneNumber":"9999999999","credits":5,"referralCode":"PIN-XYZ12",
            "isProfileComplete":true}"#;
        let session: UserSession = serde_json::from_str(raw).unwrap();
        assert_eq!(session.user_type, PlanTier::Ca);
        assert!(session.connected_gstins.is_empty());
        assert!(session.company_name.is_empty());
    }

    #[test]
    fn test_admin_phone_gets_admin_role() {
        assert_eq!(Role::for_phone("9999999999", "9999999999"), Role::Admin);
        assert_eq!(Role::for_phone("9876543210", "9999999999"), Role::User);
    }

    #[test]
    fn test_badges_and_labels() {
        let mut session = sample();
        assert_eq!(session.credits_label(), "5 Credits");
        assert_eq!(session.badge(), "Business");
        assert_eq!(session.initials(), "AR");
        session.role = Role::Admin;
        assert_eq!(session.credits_label(), "Unlimited");
        assert_eq!(session.badge(), "admin");
    }

    #[test]
    fn test_pending_login_drops_blank_referral() {
        let pending = PendingLogin::sign_in("9876543210".into(), "  ".into());
        assert_eq!(pending.referral_code, None);
        let pending = PendingLogin::sign_up(
            "9876543210".into(),
            RegistrationData {
                referral_code: "PIN-QWERT".into(),
                ..Default::default()
            },
        );
        assert_eq!(pending.referral_code.as_deref(), Some("PIN-QWERT"));
        assert!(pending.registration.is_some());
    }
}
