//! Domain aggregates of the dashboard with their fixture data.

pub mod common;

pub mod a001_customer;
pub mod a002_subscription;
pub mod a003_sales_invoice;
pub mod a004_vendor_itc;
pub mod a005_compliance_alert;
pub mod a006_support_ticket;
pub mod a007_activity_log;
pub mod a008_missing_invoice;
pub mod a009_notification;
