use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::common::{contains_ignore_case, AggregateRoot, HasStatus, UnknownVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, TicketStatus::Open | TicketStatus::InProgress)
    }
}

impl FromStr for TicketStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("ticket status", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TicketPriority {
    Low,
    Normal,
    High,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 3] = [TicketPriority::Low, TicketPriority::Normal, TicketPriority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Normal => "Normal",
            TicketPriority::High => "High",
        }
    }
}

impl FromStr for TicketPriority {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("ticket priority", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub id: u32,
    pub subject: String,
    pub message: String,
    pub requester: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub created_at: String,
}

impl SupportTicket {
    pub fn reference(&self) -> String {
        format!("TCK-{:04}", self.id)
    }
}

impl AggregateRoot for SupportTicket {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn code(&self) -> &str {
        &self.subject
    }

    fn description(&self) -> &str {
        &self.message
    }

    fn matches(&self, query: &str) -> bool {
        contains_ignore_case(&self.subject, query)
            || contains_ignore_case(&self.requester, query)
            || contains_ignore_case(&self.message, query)
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn element_name() -> &'static str {
        "Support Ticket"
    }

    fn list_name() -> &'static str {
        "Support Tickets"
    }
}

impl HasStatus for SupportTicket {
    type Status = TicketStatus;

    fn status(&self) -> TicketStatus {
        self.status
    }

    fn set_status(&mut self, status: TicketStatus) {
        self.status = status;
    }
}

pub fn fixtures() -> Vec<SupportTicket> {
    let rows = [
        (1, "Unable to download GSTR-2B", "The download button keeps spinning for the October period.", "Sarah Chen", TicketStatus::Open, TicketPriority::High, "2023-11-27 10:15"),
        (2, "Credits not added after referral", "My colleague signed up with my code but no credits were added.", "David Lee", TicketStatus::InProgress, TicketPriority::Normal, "2023-11-26 16:40"),
        (3, "Invoice mismatch in ITC report", "Two invoices from Logistics Co. appear twice.", "Maria Garcia", TicketStatus::Resolved, TicketPriority::Normal, "2023-11-22 09:05"),
        (4, "Change billing email", "Please send invoices to accounts@example.com.", "Michael Brown", TicketStatus::Closed, TicketPriority::Low, "2023-11-18 13:30"),
    ];
    rows.into_iter()
        .map(|(id, subject, message, requester, status, priority, created_at)| SupportTicket {
            id,
            subject: subject.to_string(),
            message: message.to_string(),
            requester: requester.to_string(),
            status,
            priority,
            created_at: created_at.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_round_trip() {
        for status in TicketStatus::ALL {
            assert_eq!(status.as_str().parse::<TicketStatus>(), Ok(status));
        }
        let err = "Pending".parse::<TicketStatus>().unwrap_err();
        assert_eq!(err.kind, "ticket status");
        assert_eq!(fixtures()[0].reference(), "TCK-0001");
    }
}
