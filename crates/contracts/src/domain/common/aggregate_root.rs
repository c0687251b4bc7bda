use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Root of an aggregate: identity, business code and display metadata.
pub trait AggregateRoot {
    type Id: Copy + Eq + Hash + Debug + Display;

    fn id(&self) -> Self::Id;

    /// Business code shown in tables (invoice number, GSTIN, ...).
    fn code(&self) -> &str;

    fn description(&self) -> &str;

    /// Case-insensitive text match used by list filters.
    fn matches(&self, query: &str) -> bool {
        contains_ignore_case(self.code(), query) || contains_ignore_case(self.description(), query)
    }

    /// Aggregate index, e.g. "a001"
    fn aggregate_index() -> &'static str;

    fn element_name() -> &'static str;

    fn list_name() -> &'static str;
}

/// Aggregates with a lifecycle status that admins can switch.
pub trait HasStatus {
    type Status: Copy + Eq + Debug;

    fn status(&self) -> Self::Status;

    fn set_status(&mut self, status: Self::Status);
}

/// A blank needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Global Solutions Ltd.", "solutions"));
        assert!(contains_ignore_case("anything", "  "));
        assert!(!contains_ignore_case("Priya Singh", "ramesh"));
    }
}
