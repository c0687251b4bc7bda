//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"d401_itc--dashboard"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the module name searchable: copy the id from the
//! DOM inspector and search the sources for the part before it.

/// Admin record list with filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Guided action page (GSTIN connection).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Account pages: settings, support, subscription.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Pages outside the shell: login, OTP, legal.
pub const PAGE_CAT_PUBLIC: &str = "public";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("d401_itc--dashboard"));
        assert!(!is_valid_page_id("d401_itc"));
        assert!(!is_valid_page_id("--list"));
    }
}
