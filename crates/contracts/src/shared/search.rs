//! Global search over navigation targets, invoices and vendors.

use serde::{Deserialize, Serialize};

use crate::domain::a003_sales_invoice::SalesInvoice;
use crate::domain::a004_vendor_itc::VendorItc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchCategory {
    Page,
    Action,
    Invoice,
    Vendor,
}

impl SearchCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchCategory::Page => "Page",
            SearchCategory::Action => "Action",
            SearchCategory::Invoice => "Invoice",
            SearchCategory::Vendor => "Vendor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchItem {
    pub id: String,
    pub title: String,
    pub category: SearchCategory,
    pub path: String,
    pub description: Option<String>,
    /// Icon name understood by the frontend icon set.
    pub icon: String,
}

impl SearchItem {
    fn matches(&self, lowered_query: &str) -> bool {
        self.title.to_lowercase().contains(lowered_query)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(lowered_query))
            || self.category.as_str().to_lowercase().contains(lowered_query)
    }
}

const NAV_ITEMS: [(&str, &str, SearchCategory, &str, &str); 7] = [
    ("nav-overview", "Overview", SearchCategory::Page, "/dashboard/overview", "dashboard"),
    ("nav-sales", "Sales Register", SearchCategory::Page, "/dashboard/sales", "credit-card"),
    ("nav-itc", "Input Tax Credit", SearchCategory::Page, "/dashboard/itc", "file-text"),
    ("nav-compliance", "Compliance & Alerts", SearchCategory::Page, "/dashboard/compliance", "shield-check"),
    ("nav-settings", "Settings", SearchCategory::Page, "/settings", "settings"),
    ("nav-sub", "Subscription", SearchCategory::Page, "/subscription", "zap"),
    ("nav-gst", "Connect GSTIN", SearchCategory::Action, "/gst-connection", "building"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct SearchIndex {
    items: Vec<SearchItem>,
    max_results: usize,
}

impl SearchIndex {
    /// Navigation targets first, then one entry per invoice, then per vendor.
    pub fn build(invoices: &[SalesInvoice], vendors: &[VendorItc], max_results: usize) -> Self {
        let nav = NAV_ITEMS.iter().map(|(id, title, category, path, icon)| SearchItem {
            id: id.to_string(),
            title: title.to_string(),
            category: *category,
            path: path.to_string(),
            description: None,
            icon: icon.to_string(),
        });
        let invoices = invoices.iter().map(|inv| SearchItem {
            id: format!("inv-{}", inv.invoice_no),
            title: format!("Invoice {}", inv.invoice_no),
            category: SearchCategory::Invoice,
            path: "/dashboard/sales".to_string(),
            description: Some(format!("{} - {}", inv.customer, inv.total_value)),
            icon: "file-text".to_string(),
        });
        let vendors = vendors.iter().map(|v| SearchItem {
            id: format!("vnd-{}", v.gstin),
            title: v.name.clone(),
            category: SearchCategory::Vendor,
            path: "/dashboard/itc".to_string(),
            description: Some(format!("GSTIN: {}", v.gstin)),
            icon: "users".to_string(),
        });

        Self {
            items: nav.chain(invoices).chain(vendors).collect(),
            max_results,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Blank query yields nothing; otherwise a case-insensitive substring
    /// match over title, description and category, in index order.
    pub fn query(&self, query: &str) -> Vec<SearchItem> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let lowered = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.matches(&lowered))
            .take(self.max_results)
            .cloned()
            .collect()
    }
}

/// Keys the search box reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    /// Ctrl+K or Cmd+K
    FocusShortcut,
}

impl SearchKey {
    /// Maps a `KeyboardEvent.key` plus modifier state.
    pub fn from_key(key: &str, ctrl_or_meta: bool) -> Option<Self> {
        match key {
            "k" | "K" if ctrl_or_meta => Some(SearchKey::FocusShortcut),
            "ArrowDown" => Some(SearchKey::ArrowDown),
            "ArrowUp" => Some(SearchKey::ArrowUp),
            "Enter" => Some(SearchKey::Enter),
            "Escape" => Some(SearchKey::Escape),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    None,
    /// Highlight moved; the caller should prevent the default key action.
    Moved,
    Select(usize),
    Close,
    Focus,
}

/// Open state and highlighted row of the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchCursor {
    pub open: bool,
    pub selected: usize,
}

impl SearchCursor {
    /// Called whenever the result list is recomputed.
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    pub fn handle(&mut self, key: SearchKey, result_count: usize) -> SearchAction {
        if key == SearchKey::FocusShortcut {
            self.open = true;
            return SearchAction::Focus;
        }
        if !self.open {
            return SearchAction::None;
        }
        match key {
            SearchKey::Escape => {
                self.open = false;
                SearchAction::Close
            }
            _ if result_count == 0 => SearchAction::None,
            SearchKey::ArrowDown => {
                self.selected = (self.selected + 1) % result_count;
                SearchAction::Moved
            }
            SearchKey::ArrowUp => {
                self.selected = (self.selected + result_count - 1) % result_count;
                SearchAction::Moved
            }
            SearchKey::Enter => {
                self.open = false;
                SearchAction::Select(self.selected.min(result_count - 1))
            }
            SearchKey::FocusShortcut => SearchAction::Focus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{a003_sales_invoice, a004_vendor_itc};

    fn index() -> SearchIndex {
        SearchIndex::build(&a003_sales_invoice::fixtures(), &a004_vendor_itc::fixtures(), 8)
    }

    #[test]
    fn test_index_contents() {
        let index = index();
        assert_eq!(index.len(), 7 + 5 + 5);
    }

    #[test]
    fn test_blank_query_has_no_results() {
        assert!(index().query("").is_empty());
        assert!(index().query("   ").is_empty());
    }

    #[test]
    fn test_invoice_query_returns_only_invoices() {
        let results = index().query("invoice");
        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|r| r.category == SearchCategory::Invoice));
        assert_eq!(results[0].title, "Invoice INV-2023-001");
        assert_eq!(
            results[0].description.as_deref(),
            Some("Global Solutions Ltd. - ₹53,100")
        );
    }

    #[test]
    fn test_results_are_capped() {
        // "a" hits most titles and descriptions
        let results = index().query("a");
        assert_eq!(results.len(), 8);
        assert_eq!(results[0].id, "nav-overview");
    }

    #[test]
    fn test_vendor_by_gstin() {
        let results = index().query("27zyxwj");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Tech Solutions Pvt. Ltd.");
        assert_eq!(results[0].path, "/dashboard/itc");
    }

    #[test]
    fn test_cursor_wraps_around() {
        let mut cursor = SearchCursor { open: true, selected: 0 };
        assert_eq!(cursor.handle(SearchKey::ArrowUp, 3), SearchAction::Moved);
        assert_eq!(cursor.selected, 2);
        cursor.handle(SearchKey::ArrowDown, 3);
        assert_eq!(cursor.selected, 0);
        assert_eq!(cursor.handle(SearchKey::Enter, 3), SearchAction::Select(0));
        assert!(!cursor.open);
    }

    #[test]
    fn test_cursor_ignores_navigation_without_results() {
        let mut cursor = SearchCursor { open: true, selected: 0 };
        assert_eq!(cursor.handle(SearchKey::ArrowDown, 0), SearchAction::None);
        assert_eq!(cursor.handle(SearchKey::Enter, 0), SearchAction::None);
        assert_eq!(cursor.handle(SearchKey::Escape, 0), SearchAction::Close);
        assert_eq!(cursor.handle(SearchKey::ArrowDown, 2), SearchAction::None);
        assert_eq!(cursor.handle(SearchKey::FocusShortcut, 0), SearchAction::Focus);
        assert!(cursor.open);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(SearchKey::from_key("k", true), Some(SearchKey::FocusShortcut));
        assert_eq!(SearchKey::from_key("k", false), None);
        assert_eq!(SearchKey::from_key("Escape", false), Some(SearchKey::Escape));
    }
}
