//! Plan- and role-based capabilities.
//!
//! Every gated feature asks `capabilities(plan, role)` instead of comparing
//! plan names on its own.

pub mod plans;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::shared::config::PlanLimits;
use crate::system::auth::{PlanTier, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Capability {
    LiabilityAnalytics,
    ComplianceScoring,
    UnlimitedExport,
    PriorityPhoneSupport,
    MultipleGstins,
    UnlimitedGstins,
    ApiAccess,
}

impl Capability {
    pub const ALL: [Capability; 7] = [
        Capability::LiabilityAnalytics,
        Capability::ComplianceScoring,
        Capability::UnlimitedExport,
        Capability::PriorityPhoneSupport,
        Capability::MultipleGstins,
        Capability::UnlimitedGstins,
        Capability::ApiAccess,
    ];

    /// Name shown in the lock overlay and the upgrade dialog.
    pub fn feature_name(&self) -> &'static str {
        match self {
            Capability::LiabilityAnalytics => "Advanced Liability Analytics",
            Capability::ComplianceScoring => "Compliance Scoring",
            Capability::UnlimitedExport => "Unlimited Data Export",
            Capability::PriorityPhoneSupport => "Priority Phone Support",
            Capability::MultipleGstins => "Multiple GSTINs",
            Capability::UnlimitedGstins => "Unlimited GSTINs",
            Capability::ApiAccess => "Advanced API Access",
        }
    }

    /// Lowest plan that includes the capability.
    pub fn minimum_plan(&self) -> PlanTier {
        match self {
            Capability::UnlimitedGstins | Capability::ApiAccess => PlanTier::Ca,
            _ => PlanTier::Business,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CapabilitySet(BTreeSet<Capability>);

impl CapabilitySet {
    pub fn has(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_subset(&self, other: &CapabilitySet) -> bool {
        self.0.is_subset(&other.0)
    }
}

/// Capabilities unlocked for a plan. The role picks routes and credit
/// metering only, so an administrator on the Individual tier is locked
/// like any other Individual session.
pub fn capabilities(plan: PlanTier, _role: Role) -> CapabilitySet {
    CapabilitySet(
        Capability::ALL
            .into_iter()
            .filter(|c| plan >= c.minimum_plan())
            .collect(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GstinLimit {
    Limited(usize),
    Unlimited,
}

impl GstinLimit {
    /// Whether one more GSTIN may be connected when `count` are connected.
    pub fn allows(&self, count: usize) -> bool {
        match self {
            GstinLimit::Limited(max) => count < *max,
            GstinLimit::Unlimited => true,
        }
    }

    /// Counter denominator, e.g. `1/5`.
    pub fn short_label(&self) -> String {
        match self {
            GstinLimit::Limited(max) => max.to_string(),
            GstinLimit::Unlimited => "∞".to_string(),
        }
    }

    pub fn badge_label(&self) -> String {
        match self {
            GstinLimit::Limited(1) => "Limit: 1 GSTIN".to_string(),
            GstinLimit::Limited(max) => format!("Limit: {max} GSTINs"),
            GstinLimit::Unlimited => "Unlimited GSTINs".to_string(),
        }
    }
}

pub fn gstin_limit(plan: PlanTier, limits: &PlanLimits) -> GstinLimit {
    match plan {
        PlanTier::Individual => GstinLimit::Limited(limits.individual_gstins),
        PlanTier::Business => GstinLimit::Limited(limits.business_gstins),
        PlanTier::Ca => GstinLimit::Unlimited,
    }
}

/// Upsell shown when the GSTIN limit is reached.
pub fn upgrade_feature_for_limit(plan: PlanTier) -> Capability {
    match plan {
        PlanTier::Individual => Capability::MultipleGstins,
        PlanTier::Business | PlanTier::Ca => Capability::UnlimitedGstins,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_individual_has_no_gated_features() {
        assert!(capabilities(PlanTier::Individual, Role::User).is_empty());
    }

    #[test]
    fn test_business_and_ca() {
        let business = capabilities(PlanTier::Business, Role::User);
        assert!(business.has(Capability::ComplianceScoring));
        assert!(business.has(Capability::MultipleGstins));
        assert!(!business.has(Capability::UnlimitedGstins));
        assert!(!business.has(Capability::ApiAccess));
        assert_eq!(capabilities(PlanTier::Ca, Role::User).len(), Capability::ALL.len());
    }

    #[test]
    fn test_capabilities_are_monotonic_in_plan() {
        for pair in PlanTier::ALL.windows(2) {
            let lower = capabilities(pair[0], Role::User);
            let higher = capabilities(pair[1], Role::User);
            assert!(lower.is_subset(&higher), "{:?} vs {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_admin_is_gated_by_plan() {
        let admin = capabilities(PlanTier::Individual, Role::Admin);
        assert!(!admin.has(Capability::UnlimitedExport));
        assert!(!admin.has(Capability::PriorityPhoneSupport));
        assert!(admin.is_empty());
        for plan in PlanTier::ALL {
            assert_eq!(capabilities(plan, Role::Admin), capabilities(plan, Role::User));
        }
    }

    #[test]
    fn test_gstin_limits() {
        let limits = PlanLimits {
            individual_gstins: 1,
            business_gstins: 5,
        };
        let individual = gstin_limit(PlanTier::Individual, &limits);
        assert!(individual.allows(0));
        assert!(!individual.allows(1));
        assert_eq!(individual.badge_label(), "Limit: 1 GSTIN");

        let business = gstin_limit(PlanTier::Business, &limits);
        assert!(business.allows(4));
        assert!(!business.allows(5));
        assert_eq!(business.short_label(), "5");

        let ca = gstin_limit(PlanTier::Ca, &limits);
        assert!(ca.allows(10_000));
        assert_eq!(ca.short_label(), "∞");
    }

    #[test]
    fn test_upgrade_feature_for_limit() {
        assert_eq!(
            upgrade_feature_for_limit(PlanTier::Individual).feature_name(),
            "Multiple GSTINs"
        );
        assert_eq!(
            upgrade_feature_for_limit(PlanTier::Business).feature_name(),
            "Unlimited GSTINs"
        );
    }
}
