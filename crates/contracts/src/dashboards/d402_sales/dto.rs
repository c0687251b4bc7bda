use serde::{Deserialize, Serialize};

use crate::domain::a003_sales_invoice::SalesInvoice;
use crate::shared::chart::{ChartData, Series};
use crate::shared::indicators::{Indicator, IndicatorStatus};

pub const TREND_HEADLINE: &str = "₹ 3,10,000";
pub const TREND_CHANGE: &str = "+12.5% vs last year";
pub const EXPORT_NOTICE: &str = "Downloading Sales Register...";
pub const REPORT_PAGE_SIZE: usize = 5;

pub fn summary_cards() -> Vec<Indicator> {
    vec![
        Indicator::new("b2b", "B2B Sales", "₹2,35,450", "briefcase")
            .with_change("+12.5% vs. last month")
            .with_status(IndicatorStatus::Good),
        Indicator::new("b2c", "B2C Sales", "₹82,120", "users")
            .with_change("-3.2% vs. last month")
            .with_status(IndicatorStatus::Bad),
        Indicator::new("export", "Export Sales", "₹1,55,000", "globe")
            .with_change("+25% vs. last month")
            .with_status(IndicatorStatus::Good),
        Indicator::new("liability", "Total Tax Liability", "₹75,890", "file-text")
            .with_change("+8.1% vs. last month")
            .with_status(IndicatorStatus::Warning),
    ]
}

pub fn sales_trend() -> ChartData {
    ChartData::new(
        &["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"],
        vec![Series::new(
            "Sales",
            "#6366f1",
            vec![
                320000.0, 350000.0, 310000.0, 380000.0, 410000.0, 390000.0, 430000.0, 450000.0, 430000.0,
                470000.0, 500000.0, 530000.0,
            ],
        )],
    )
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCustomer {
    pub name: String,
    pub amount: String,
}

impl TopCustomer {
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

pub fn top_customers() -> Vec<TopCustomer> {
    [("Global Solutions", "₹ 1.2L"), ("Tech Inno Pvt", "₹ 85K"), ("Export Traders", "₹ 75K")]
        .into_iter()
        .map(|(name, amount)| TopCustomer {
            name: name.to_string(),
            amount: amount.to_string(),
        })
        .collect()
}

/// State and its share of sales, in percent.
pub fn geo_split() -> Vec<(&'static str, u32)> {
    vec![("Maharashtra", 60), ("Karnataka", 25)]
}

/// The full register repeats the recent transactions three times.
pub fn full_register(invoices: &[SalesInvoice]) -> Vec<SalesInvoice> {
    invoices.iter().cycle().take(invoices.len() * 3).cloned().collect()
}

/// One page of a longer list, `page` counted from zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PageWindow {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl PageWindow {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let mut window = Self { page, page_size: page_size.max(1), total };
        window.page = window.page.min(window.page_count().saturating_sub(1));
        window
    }

    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        let start = (self.page * self.page_size).min(self.total);
        start..(start + self.page_size).min(self.total)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    /// `Showing 1 - 5 of 15 records`
    pub fn label(&self) -> String {
        let range = self.range();
        if range.is_empty() {
            return "No records".to_string();
        }
        format!("Showing {} - {} of {} records", range.start + 1, range.end, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_sales_invoice;

    #[test]
    fn test_full_register_paging() {
        let rows = full_register(&a003_sales_invoice::fixtures());
        assert_eq!(rows.len(), 15);
        let first = PageWindow::new(0, REPORT_PAGE_SIZE, rows.len());
        assert_eq!(first.label(), "Showing 1 - 5 of 15 records");
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = PageWindow::new(7, REPORT_PAGE_SIZE, rows.len());
        assert_eq!(last.page, 2);
        assert_eq!(last.range(), 10..15);
        assert!(!last.has_next());
    }

    #[test]
    fn test_empty_window() {
        let window = PageWindow::new(0, 5, 0);
        assert_eq!(window.page_count(), 0);
        assert_eq!(window.label(), "No records");
    }

    #[test]
    fn test_trend_covers_a_year() {
        assert_eq!(sales_trend().labels.len(), 12);
        assert_eq!(top_customers()[1].initial(), 'T');
    }
}
