//! Sorting and match highlighting for the admin tables and the search dropdown.

use contracts::domain::a001_customer::Customer;
use contracts::domain::a002_subscription::Subscription;
use contracts::domain::a006_support_ticket::SupportTicket;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Types that can be ordered by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sorts the list by a column
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Arrow shown next to the active column header
pub fn sort_indicator(current: &str, field: &str, ascending: bool) -> &'static str {
    if current != field {
        ""
    } else if ascending {
        " ▲"
    } else {
        " ▼"
    }
}

/// Money columns hold display strings like `$1,250.75`.
fn money_value(s: &str) -> f64 {
    s.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect::<String>()
        .parse()
        .unwrap_or(0.0)
}

impl Sortable for Customer {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "status" => self.subscription.as_str().cmp(other.subscription.as_str()),
            "spend" => money_value(&self.total_spend)
                .partial_cmp(&money_value(&other.total_spend))
                .unwrap_or(Ordering::Equal),
            _ => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
        }
    }
}

impl Sortable for Subscription {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "plan" => self.plan.as_str().cmp(other.plan.as_str()),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            "end" => self.end_date.cmp(&other.end_date),
            _ => self.customer_name.to_lowercase().cmp(&other.customer_name.to_lowercase()),
        }
    }
}

impl Sortable for SupportTicket {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "status" => self.status.as_str().cmp(other.status.as_str()),
            "priority" => self.priority.cmp(&other.priority),
            "created" => self.created_at.cmp(&other.created_at),
            _ => self.id.cmp(&other.id),
        }
    }
}

/// Wraps case-insensitive matches of `filter` in `<mark>`
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter_lower = filter.trim().to_lowercase();
    let text_lower = text.to_lowercase();
    // lowercasing may change byte offsets for non-ASCII text
    if filter_lower.is_empty() || text_lower.len() != text.len() || !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <span>{parts}</span> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_customer;

    #[test]
    fn test_sort_customers_by_spend() {
        let mut rows = a001_customer::fixtures();
        sort_list(&mut rows, "spend", false);
        assert_eq!(rows[0].name, "David Lee");
        assert_eq!(rows.last().map(|c| c.name.as_str()), Some("Michael Brown"));
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(sort_indicator("name", "name", true), " ▲");
        assert_eq!(sort_indicator("name", "spend", true), "");
    }
}
