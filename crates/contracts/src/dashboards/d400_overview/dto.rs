use serde::{Deserialize, Serialize};

use crate::shared::chart::{ChartData, Series};
use crate::shared::indicators::{Indicator, IndicatorStatus, Trend};

pub const DATE_RANGES: [&str; 5] = [
    "Last 30 Days",
    "This Quarter",
    "Last Quarter",
    "Financial Year to Date",
    "Last Financial Year",
];

pub const LIABILITY_GATE_TEXT: &str =
    "Upgrade to Business or CA plan to view detailed ITC vs Liability comparisons.";

pub fn stat_cards() -> Vec<Indicator> {
    vec![
        Indicator::new("outward-liability", "Outward Tax Liability", "₹ 1,850,200", "file-text")
            .with_change("8.2% MoM")
            .with_trend(Trend::Up)
            .with_status(IndicatorStatus::Warning)
            .with_link("/dashboard/sales"),
        Indicator::new("itc-claimed", "ITC Claimed", "₹ 1,520,150", "credit-card")
            .with_change("5.1% MoM")
            .with_trend(Trend::Up)
            .with_status(IndicatorStatus::Good)
            .with_link("/dashboard/itc"),
        Indicator::new("net-payable", "Net Tax Payable", "₹ 330,050", "activity")
            .with_change("12.3% MoM")
            .with_trend(Trend::Down)
            .with_status(IndicatorStatus::Good)
            .with_link("/dashboard/compliance"),
        Indicator::new("cash-credit", "Cash vs Credit Util.", "70% / 30%", "pie-chart")
            .with_change("2.5% MoM")
            .with_trend(Trend::Up)
            .with_link("/dashboard/compliance"),
    ]
}

/// Monthly income against expense.
pub fn sales_purchase_trend() -> ChartData {
    ChartData::new(
        &["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        vec![
            Series::new("Income", "#6366f1", vec![45000.0, 32000.0, 38000.0, 36000.0, 42000.0, 44000.0]),
            Series::new("Expense", "#ec4899", vec![28000.0, 30000.0, 33000.0, 31000.0, 37000.0, 39000.0]),
        ],
    )
}

pub fn liability_vs_itc() -> ChartData {
    ChartData::new(
        &["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        vec![
            Series::new(
                "Liability",
                "#ef4444",
                vec![1_850_000.0, 1_910_000.0, 1_890_000.0, 1_980_000.0, 2_100_000.0, 2_050_000.0],
            ),
            Series::new(
                "ITC",
                "#f59e0b",
                vec![1_510_000.0, 1_530_000.0, 1_520_000.0, 1_650_000.0, 1_750_000.0, 1_700_000.0],
            ),
        ],
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilingStatus {
    Due,
    Filed,
}

impl FilingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilingStatus::Due => "Due",
            FilingStatus::Filed => "Filed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingFiling {
    pub form: String,
    pub due_date: String,
    pub status: FilingStatus,
}

pub fn upcoming_filings() -> Vec<UpcomingFiling> {
    [
        ("GSTR-3B (May 2024)", "Jul 20, 2024", FilingStatus::Due),
        ("GSTR-1 (May 2024)", "Jun 11, 2024", FilingStatus::Filed),
        ("GSTR-9 (FY 2023-24)", "Dec 31, 2024", FilingStatus::Due),
        ("GSTR-3B (Apr 2024)", "May 20, 2024", FilingStatus::Filed),
        ("GSTR-1 (Apr 2024)", "May 11, 2024", FilingStatus::Filed),
    ]
    .into_iter()
    .map(|(form, due_date, status)| UpcomingFiling {
        form: form.to_string(),
        due_date: due_date.to_string(),
        status,
    })
    .collect()
}

/// Short alert on the overview page; `link` opens the page that resolves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewAlert {
    pub title: String,
    pub text: String,
    pub age: String,
    pub icon: String,
    pub link: Option<String>,
}

pub fn critical_alerts() -> Vec<OverviewAlert> {
    [
        (
            "ITC Mismatch Detected",
            "₹ 45,000 difference found between GSTR-2B and purchase register.",
            "2 hours ago",
            "alert-triangle",
            Some("/dashboard/itc"),
        ),
        (
            "Filing Deadline Approaching",
            "GSTR-3B for May 2024 is due in 5 days.",
            "1 day ago",
            "clock",
            Some("/dashboard/compliance"),
        ),
        (
            "Compliance Update",
            "New e-invoicing threshold applies from next quarter.",
            "3 days ago",
            "info",
            None,
        ),
    ]
    .into_iter()
    .map(|(title, text, age, icon, link)| OverviewAlert {
        title: title.to_string(),
        text: text.to_string(),
        age: age.to_string(),
        icon: icon.to_string(),
        link: link.map(str::to_string),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_link_to_detail_pages() {
        let cards = stat_cards();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].link.as_deref(), Some("/dashboard/sales"));
        assert_eq!(cards[2].trend, Some(Trend::Down));
    }

    #[test]
    fn test_chart_series_align_with_labels() {
        for data in [sales_purchase_trend(), liability_vs_itc()] {
            assert!(data.series.iter().all(|s| s.values.len() == data.labels.len()));
        }
        assert_eq!(upcoming_filings().iter().filter(|f| f.status == FilingStatus::Due).count(), 2);
    }
}
