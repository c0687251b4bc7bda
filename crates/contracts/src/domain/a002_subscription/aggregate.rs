use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::common::{contains_ignore_case, AggregateRoot, HasStatus, UnknownVariant};

/// Plan names of the customer subscriptions managed by admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServicePlan {
    Enterprise,
    Pro,
    Basic,
}

impl ServicePlan {
    pub const ALL: [ServicePlan; 3] = [ServicePlan::Enterprise, ServicePlan::Pro, ServicePlan::Basic];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServicePlan::Enterprise => "Enterprise",
            ServicePlan::Pro => "Pro",
            ServicePlan::Basic => "Basic",
        }
    }

    pub fn monthly_price(&self) -> &'static str {
        match self {
            ServicePlan::Enterprise => "$99.99",
            ServicePlan::Pro => "$49.99",
            ServicePlan::Basic => "$19.99",
        }
    }
}

impl FromStr for ServicePlan {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("service plan", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubscriptionStatus {
    Active,
    Pending,
    Cancelled,
    Suspended,
}

impl SubscriptionStatus {
    pub const ALL: [SubscriptionStatus; 4] = [
        SubscriptionStatus::Active,
        SubscriptionStatus::Pending,
        SubscriptionStatus::Cancelled,
        SubscriptionStatus::Suspended,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "Active",
            SubscriptionStatus::Pending => "Pending",
            SubscriptionStatus::Cancelled => "Cancelled",
            SubscriptionStatus::Suspended => "Suspended",
        }
    }
}

impl FromStr for SubscriptionStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("subscription status", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: u32,
    pub customer_name: String,
    pub email: String,
    pub plan: ServicePlan,
    pub status: SubscriptionStatus,
    pub start_date: String,
    pub end_date: String,
    pub monthly_price: String,
}

impl AggregateRoot for Subscription {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn code(&self) -> &str {
        &self.customer_name
    }

    fn description(&self) -> &str {
        &self.email
    }

    fn matches(&self, query: &str) -> bool {
        contains_ignore_case(&self.customer_name, query)
            || contains_ignore_case(&self.email, query)
            || contains_ignore_case(self.plan.as_str(), query)
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn element_name() -> &'static str {
        "Subscription"
    }

    fn list_name() -> &'static str {
        "Subscriptions"
    }
}

impl HasStatus for Subscription {
    type Status = SubscriptionStatus;

    fn status(&self) -> SubscriptionStatus {
        self.status
    }

    fn set_status(&mut self, status: SubscriptionStatus) {
        self.status = status;
    }
}

/// Sum of the monthly prices of active subscriptions, formatted as dollars.
pub fn monthly_recurring_revenue(rows: &[Subscription]) -> String {
    let cents: u64 = rows
        .iter()
        .filter(|s| s.status == SubscriptionStatus::Active)
        .filter_map(|s| parse_cents(&s.monthly_price))
        .sum();
    format!("${}.{:02}", cents / 100, cents % 100)
}

fn parse_cents(price: &str) -> Option<u64> {
    let digits = price.trim_start_matches('$').replace(',', "");
    let (whole, frac) = digits.split_once('.').unwrap_or((digits.as_str(), "0"));
    let whole: u64 = whole.parse().ok()?;
    let frac: u64 = format!("{frac:0<2}").get(..2)?.parse().ok()?;
    Some(whole * 100 + frac)
}

pub fn fixtures() -> Vec<Subscription> {
    let rows = [
        (1, "Acme Corp", "acme", ServicePlan::Enterprise, SubscriptionStatus::Active, "2023-01-01", "2024-01-01"),
        (2, "Globex Inc.", "globex", ServicePlan::Pro, SubscriptionStatus::Pending, "2023-02-15", "2024-02-15"),
        (3, "Soylent Corp", "soylent", ServicePlan::Basic, SubscriptionStatus::Cancelled, "2023-03-01", "2023-09-01"),
        (4, "Initech LLC", "initech", ServicePlan::Pro, SubscriptionStatus::Active, "2023-04-20", "2024-04-20"),
        (5, "Umbrella Corp", "umbrella", ServicePlan::Enterprise, SubscriptionStatus::Suspended, "2023-05-10", "2024-05-10"),
        (6, "Weyland-Yutani", "weyland", ServicePlan::Basic, SubscriptionStatus::Active, "2023-06-01", "2024-06-01"),
    ];
    rows.into_iter()
        .map(|(id, name, mailbox, plan, status, start, end)| Subscription {
            id,
            customer_name: name.to_string(),
            email: format!("{mailbox}@example.com"),
            plan,
            status,
            start_date: start.to_string(),
            end_date: end.to_string(),
            monthly_price: plan.monthly_price().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_prices_follow_plan() {
        let rows = fixtures();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].monthly_price, "$99.99");
        assert_eq!(rows[5].email, "weyland@example.com");
    }

    #[test]
    fn test_monthly_recurring_revenue_counts_active_only() {
        // Acme 99.99 + Initech 49.99 + Weyland 19.99
        assert_eq!(monthly_recurring_revenue(&fixtures()), "$169.97");
        assert_eq!(monthly_recurring_revenue(&[]), "$0.00");
    }

    #[test]
    fn test_filter_labels_parse() {
        assert_eq!("Pro".parse::<ServicePlan>(), Ok(ServicePlan::Pro));
        assert_eq!("Suspended".parse::<SubscriptionStatus>(), Ok(SubscriptionStatus::Suspended));
        // "All" is the filter placeholder, not a status
        assert!("All".parse::<SubscriptionStatus>().is_err());
    }
}
