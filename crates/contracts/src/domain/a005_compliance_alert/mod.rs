pub mod aggregate;

pub use aggregate::{fixtures, ComplianceAlert, Severity};
