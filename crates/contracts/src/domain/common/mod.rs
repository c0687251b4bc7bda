//! Common traits for all aggregates

pub mod aggregate_root;
pub mod parse;

pub use aggregate_root::{contains_ignore_case, AggregateRoot, HasStatus};
pub use parse::UnknownVariant;
