//! Admin-editable copies of the customer, subscription and ticket fixtures.
//!
//! One container lives for the whole app instance so every admin page sees
//! the same edits. Nothing is persisted; a reload restores the fixtures.

use chrono::Local;

use crate::domain::a001_customer::{self, Customer};
use crate::domain::a002_subscription::{self, Subscription};
use crate::domain::a006_support_ticket::{self, SupportTicket, TicketPriority, TicketStatus};
use crate::domain::a007_activity_log::{self, ActivityLog, LogCategory};
use crate::domain::common::AggregateRoot;
use crate::shared::record_table::RecordTable;

#[derive(Debug, Clone, PartialEq)]
pub struct AdminData {
    pub customers: RecordTable<Customer>,
    pub subscriptions: RecordTable<Subscription>,
    pub tickets: RecordTable<SupportTicket>,
    logs: Vec<ActivityLog>,
}

impl AdminData {
    pub fn from_fixtures() -> Self {
        Self {
            customers: RecordTable::new(a001_customer::fixtures()),
            subscriptions: RecordTable::new(a002_subscription::fixtures()),
            tickets: RecordTable::new(a006_support_ticket::fixtures()),
            logs: a007_activity_log::fixtures(),
        }
    }

    /// Newest first.
    pub fn logs(&self) -> &[ActivityLog] {
        &self.logs
    }

    /// Appends an activity log entry for an admin operation.
    pub fn record(&mut self, actor: &str, category: LogCategory, message: impl Into<String>) {
        let id = self.logs.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        let entry = ActivityLog {
            id,
            timestamp: Local::now().format("%Y-%m-%d %H:%M").to_string(),
            actor: actor.to_string(),
            category,
            message: message.into(),
        };
        log::debug!("activity #{}: {}", entry.id, entry.message);
        self.logs.insert(0, entry);
    }

    /// Files a ticket from the support form and logs it. Returns the reference.
    pub fn open_ticket(&mut self, requester: &str, subject: &str, message: &str) -> String {
        let ticket = SupportTicket {
            id: self.tickets.next_id(),
            subject: subject.to_string(),
            message: message.to_string(),
            requester: requester.to_string(),
            status: TicketStatus::Open,
            priority: TicketPriority::Normal,
            created_at: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        };
        let reference = ticket.reference();
        // next_id is always fresh
        let _ = self.tickets.insert(ticket);
        self.record(requester, LogCategory::Ticket, format!("{reference} opened: {subject}"));
        reference
    }

    pub fn filter_logs(&self, query: &str, category: Option<LogCategory>) -> Vec<ActivityLog> {
        self.logs
            .iter()
            .filter(|l| category.map_or(true, |c| l.category == c))
            .filter(|l| l.matches(query))
            .cloned()
            .collect()
    }
}

impl Default for AdminData {
    fn default() -> Self {
        Self::from_fixtures()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_subscription::SubscriptionStatus;

    #[test]
    fn test_edits_are_visible_through_the_same_container() {
        let mut data = AdminData::from_fixtures();
        data.subscriptions.set_status(2, SubscriptionStatus::Active).unwrap();
        data.record("9999999999", LogCategory::Subscription, "Globex Inc. moved to Active");

        assert_eq!(data.subscriptions.count_status(SubscriptionStatus::Active), 4);
        assert_eq!(data.logs()[0].message, "Globex Inc. moved to Active");
        assert_eq!(data.logs()[0].id, 6);
    }

    #[test]
    fn test_open_ticket_goes_to_top_and_is_logged() {
        let mut data = AdminData::from_fixtures();
        let reference = data.open_ticket("Priya Sharma", "Billing & Subscription", "Charged twice");
        assert_eq!(reference, "TCK-0005");
        let ticket = &data.tickets.rows()[0];
        assert_eq!(ticket.status, TicketStatus::Open);
        assert_eq!(ticket.requester, "Priya Sharma");
        assert_eq!(data.logs()[0].category, LogCategory::Ticket);
        assert!(data.logs()[0].message.starts_with("TCK-0005"));
    }

    #[test]
    fn test_filter_logs() {
        let data = AdminData::from_fixtures();
        assert_eq!(data.filter_logs("", None).len(), 5);
        assert_eq!(data.filter_logs("", Some(LogCategory::System)).len(), 1);
        assert_eq!(data.filter_logs("gstr-2b", None).len(), 1);
        assert!(data.filter_logs("gstr-2b", Some(LogCategory::Auth)).is_empty());
    }
}
