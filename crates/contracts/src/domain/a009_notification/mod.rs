pub mod aggregate;

pub use aggregate::{fixtures, Notification, NotificationFeed, NotificationKind};
