use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::common::{contains_ignore_case, AggregateRoot, HasStatus, UnknownVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerStatus {
    Active,
    Trial,
    Inactive,
}

impl CustomerStatus {
    pub const ALL: [CustomerStatus; 3] = [
        CustomerStatus::Active,
        CustomerStatus::Trial,
        CustomerStatus::Inactive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::Trial => "Trial",
            CustomerStatus::Inactive => "Inactive",
        }
    }
}

impl FromStr for CustomerStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("customer status", s))
    }
}

/// Customer account as listed on the admin customers page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub avatar: String,
    pub subscription: CustomerStatus,
    pub total_spend: String,
    pub last_active: String,
    pub joined: String,
}

impl Customer {
    pub fn avatar_url(seed: u32) -> String {
        format!("https://picsum.photos/32/32?random={seed}")
    }
}

impl AggregateRoot for Customer {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn code(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.total_spend
    }

    fn matches(&self, query: &str) -> bool {
        contains_ignore_case(&self.name, query)
            || contains_ignore_case(self.subscription.as_str(), query)
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }
}

impl HasStatus for Customer {
    type Status = CustomerStatus;

    fn status(&self) -> CustomerStatus {
        self.subscription
    }

    fn set_status(&mut self, status: CustomerStatus) {
        self.subscription = status;
    }
}

pub fn fixtures() -> Vec<Customer> {
    let rows = [
        (1, "Sarah Chen", CustomerStatus::Active, "$1,250.75", "2 days ago", "Jan 15, 2023"),
        (2, "Michael Brown", CustomerStatus::Trial, "$0.00", "5 hours ago", "Oct 28, 2023"),
        (3, "Fatima Khan", CustomerStatus::Inactive, "$450.00", "1 month ago", "Mar 01, 2022"),
        (4, "David Lee", CustomerStatus::Active, "$3,200.50", "1 hour ago", "Aug 20, 2021"),
        (5, "Maria Garcia", CustomerStatus::Active, "$780.20", "6 days ago", "Nov 10, 2023"),
    ];
    rows.into_iter()
        .map(|(id, name, subscription, spend, last_active, joined)| Customer {
            id,
            name: name.to_string(),
            avatar: Customer::avatar_url(id),
            subscription,
            total_spend: spend.to_string(),
            last_active: last_active.to_string(),
            joined: joined.to_string(),
        })
        .collect()
}
