pub mod aggregate;

pub use aggregate::{fixtures, ActivityLog, LogCategory};
