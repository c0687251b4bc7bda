use crate::system::auth::PlanTier;

/// Plan card on the subscription page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanOffer {
    pub tier: PlanTier,
    pub tagline: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
}

impl PlanOffer {
    pub fn action_label(&self, current: PlanTier) -> &'static str {
        if self.tier == current {
            "Current Plan"
        } else if self.tier == PlanTier::Ca {
            "Upgrade to Enterprise"
        } else {
            "Choose Plan"
        }
    }
}

pub static PLAN_OFFERS: [PlanOffer; 3] = [
    PlanOffer {
        tier: PlanTier::Individual,
        tagline: "Perfect for small businesses",
        price: "$19",
        features: &[
            "Up to 1 GSTIN",
            "Monthly Analytics Reports",
            "Email Support",
            "Limited Data Export",
        ],
    },
    PlanOffer {
        tier: PlanTier::Business,
        tagline: "Perfect for growing teams",
        price: "$49",
        features: &[
            "Up to 5 GSTINs",
            "Daily Analytics Reports",
            "Priority Email & Chat Support",
            "Unlimited Data Export",
            "Compliance Scoring",
        ],
    },
    PlanOffer {
        tier: PlanTier::Ca,
        tagline: "Perfect for large enterprises",
        price: "$99",
        features: &[
            "Unlimited GSTINs",
            "Real-time Analytics Dashboard",
            "24/7 Dedicated Support",
            "Advanced API Access",
            "Custom Integrations",
            "Dedicated Account Manager",
        ],
    },
];

pub fn offer_for(tier: PlanTier) -> &'static PlanOffer {
    match tier {
        PlanTier::Individual => &PLAN_OFFERS[0],
        PlanTier::Business => &PLAN_OFFERS[1],
        PlanTier::Ca => &PLAN_OFFERS[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_plan_is_marked() {
        let business = offer_for(PlanTier::Business);
        assert_eq!(business.price, "$49");
        assert_eq!(business.action_label(PlanTier::Business), "Current Plan");
        assert_eq!(offer_for(PlanTier::Ca).action_label(PlanTier::Business), "Upgrade to Enterprise");
        assert_eq!(offer_for(PlanTier::Individual).action_label(PlanTier::Ca), "Choose Plan");
    }
}
