use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Warning,
    Success,
    Error,
    Info,
}

impl NotificationKind {
    /// Icon name and CSS modifier of the notification row.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Warning | NotificationKind::Error => "alert-triangle",
            NotificationKind::Success => "check-circle",
            NotificationKind::Info => "info",
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            NotificationKind::Warning => "warning",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
}

impl AggregateRoot for Notification {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn code(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.message
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn element_name() -> &'static str {
        "Notification"
    }

    fn list_name() -> &'static str {
        "Notifications"
    }
}

/// In-memory notification list of the header dropdown.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

impl NotificationFeed {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Returns false when the id is unknown.
    pub fn mark_read(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        self.items.iter_mut().for_each(|n| n.read = true);
    }

    pub fn remove(&mut self, id: u32) -> Option<Notification> {
        let index = self.items.iter().position(|n| n.id == id)?;
        Some(self.items.remove(index))
    }
}

pub fn fixtures() -> Vec<Notification> {
    let rows = [
        ("GSTR-3B Due Soon", "Your GSTR-3B filing for October is due in 3 days.", "2 hours ago", NotificationKind::Warning, false),
        ("Payment Successful", "Subscription payment of ₹49 was successful.", "1 day ago", NotificationKind::Success, false),
        ("ITC Mismatch Detected", "Mismatch detected for Vendor Global Solutions Ltd.", "1 day ago", NotificationKind::Error, false),
        ("New Feature Alert", "Check out the new ITC reconciliation report.", "2 days ago", NotificationKind::Info, true),
        ("System Maintenance", "Scheduled maintenance on Sunday 2 AM.", "3 days ago", NotificationKind::Info, true),
    ];
    rows.into_iter()
        .zip(1..)
        .map(|((title, message, time, kind, read), id)| Notification {
            id,
            title: title.to_string(),
            message: message.to_string(),
            time: time.to_string(),
            kind,
            read,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_count_tracks_changes() {
        let mut feed = NotificationFeed::new(fixtures());
        assert_eq!(feed.unread_count(), 3);

        assert!(feed.mark_read(1));
        assert_eq!(feed.unread_count(), 2);
        assert!(!feed.mark_read(42));

        let removed = feed.remove(2).unwrap();
        assert_eq!(removed.title, "Payment Successful");
        assert_eq!(feed.unread_count(), 1);
        assert_eq!(feed.items().len(), 4);

        feed.mark_all_read();
        assert_eq!(feed.unread_count(), 0);
        assert!(feed.remove(2).is_none());
    }
}
