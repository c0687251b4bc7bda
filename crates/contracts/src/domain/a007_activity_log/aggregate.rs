use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::common::{contains_ignore_case, AggregateRoot, UnknownVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogCategory {
    Auth,
    Customer,
    Subscription,
    Ticket,
    System,
}

impl LogCategory {
    pub const ALL: [LogCategory; 5] = [
        LogCategory::Auth,
        LogCategory::Customer,
        LogCategory::Subscription,
        LogCategory::Ticket,
        LogCategory::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogCategory::Auth => "Auth",
            LogCategory::Customer => "Customer",
            LogCategory::Subscription => "Subscription",
            LogCategory::Ticket => "Ticket",
            LogCategory::System => "System",
        }
    }
}

impl FromStr for LogCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("log category", s))
    }
}

/// Read-only audit entry shown on the admin logs page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: u32,
    pub timestamp: String,
    pub actor: String,
    pub category: LogCategory,
    pub message: String,
}

impl AggregateRoot for ActivityLog {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn code(&self) -> &str {
        &self.actor
    }

    fn description(&self) -> &str {
        &self.message
    }

    fn matches(&self, query: &str) -> bool {
        contains_ignore_case(&self.actor, query) || contains_ignore_case(&self.message, query)
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn element_name() -> &'static str {
        "Activity Log"
    }

    fn list_name() -> &'static str {
        "Activity Logs"
    }
}

pub fn fixtures() -> Vec<ActivityLog> {
    let rows = [
        ("2023-11-28 09:12", "9999999999", LogCategory::Auth, "Administrator signed in"),
        ("2023-11-28 09:20", "9999999999", LogCategory::Subscription, "Globex Inc. moved to Pending"),
        ("2023-11-27 18:03", "system", LogCategory::System, "Nightly GSTR-2B sync completed"),
        ("2023-11-27 11:47", "9999999999", LogCategory::Customer, "Added customer Maria Garcia"),
        ("2023-11-26 16:41", "system", LogCategory::Ticket, "Ticket TCK-0002 opened by David Lee"),
    ];
    rows.into_iter()
        .zip(1..)
        .map(|((timestamp, actor, category, message), id)| ActivityLog {
            id,
            timestamp: timestamp.to_string(),
            actor: actor.to_string(),
            category,
            message: message.to_string(),
        })
        .collect()
}
