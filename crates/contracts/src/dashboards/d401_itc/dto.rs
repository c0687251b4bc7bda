use serde::{Deserialize, Serialize};

use crate::domain::a004_vendor_itc::VendorItc;
use crate::domain::common::AggregateRoot;
use crate::shared::chart::Slice;
use crate::shared::indicators::{Indicator, IndicatorStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItcTab {
    Overview,
    Reconciliation,
    Gstr2b,
}

impl ItcTab {
    pub const ALL: [ItcTab; 3] = [ItcTab::Overview, ItcTab::Reconciliation, ItcTab::Gstr2b];

    pub fn label(&self) -> &'static str {
        match self {
            ItcTab::Overview => "Overview",
            ItcTab::Reconciliation => "Reconciliation",
            ItcTab::Gstr2b => "GSTR-2B",
        }
    }
}

pub const RECONCILIATION_NOTICE: &str =
    "You have 5 invoices missing in GSTR-2B compared to your Purchase Register.";
pub const GSTR2B_PLACEHOLDER: &str = "Connect GSTIN to fetch real-time GSTR-2B data.";

pub fn summary_cards() -> Vec<Indicator> {
    vec![
        Indicator::new("itc-available", "ITC Available", "₹ 2,345,678", "credit-card")
            .with_subtext("Total eligible ITC")
            .with_status(IndicatorStatus::Good),
        Indicator::new("itc-claimed", "ITC Claimed", "₹ 2,100,500", "check-circle")
            .with_subtext("Successfully claimed")
            .with_status(IndicatorStatus::Good),
        Indicator::new("itc-mismatch", "ITC Mismatch", "₹ 245,178", "alert-triangle")
            .with_subtext("GSTR-2A vs 3B Gap")
            .with_status(IndicatorStatus::Warning),
        Indicator::new("itc-ineligible", "Ineligible ITC", "₹ 50,000", "x-circle")
            .with_subtext("Blocked under 17(5)")
            .with_status(IndicatorStatus::Bad),
        Indicator::new("missing-invoices", "Missing Invoices", "23", "file-text")
            .with_subtext("Not in GSTR-2A")
            .with_status(IndicatorStatus::Warning),
    ]
}

/// Share of ITC by eligibility, in percent.
pub fn utilization() -> Vec<Slice> {
    vec![
        Slice::new("Eligible", "#10b981", 75.0),
        Slice::new("Pending", "#f59e0b", 15.0),
        Slice::new("Ineligible", "#ef4444", 10.0),
    ]
}

/// Vendors shown in the ledger, optionally only those with blocked credit.
pub fn filter_vendors(vendors: &[VendorItc], query: &str, ineligible_only: bool) -> Vec<VendorItc> {
    vendors
        .iter()
        .filter(|v| !ineligible_only || v.has_ineligible())
        .filter(|v| v.matches(query))
        .cloned()
        .collect()
}

/// Contact card in the vendor detail dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorContact {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub pending: String,
}

impl VendorContact {
    pub fn for_vendor(vendor: &VendorItc) -> Self {
        let mailbox: String = vendor
            .name
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        Self {
            address: "123, Business Park, Mumbai, MH - 400001".to_string(),
            phone: "+91 98765 43210".to_string(),
            email: format!("accounts@{mailbox}.com"),
            pending: "₹ 0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MismatchDecision {
    Accepted,
    Rejected,
}

/// Row of the GSTR-2B vs purchase register mismatch report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MismatchRow {
    pub id: u32,
    pub invoice_no: String,
    pub vendor: String,
    pub books_amount: String,
    pub portal_amount: String,
    pub decision: Option<MismatchDecision>,
}

pub fn mismatch_report() -> Vec<MismatchRow> {
    [
        ("INV-8891", "Global Suppliers Ltd.", "₹ 45,000", "₹ 40,000"),
        ("INV-8902", "Office Supplies Inc.", "₹ 12,300", "₹ 0"),
        ("INV-8915", "Marketing Innovations", "₹ 8,750", "₹ 8,500"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((invoice_no, vendor, books, portal), id)| MismatchRow {
        id,
        invoice_no: invoice_no.to_string(),
        vendor: vendor.to_string(),
        books_amount: books.to_string(),
        portal_amount: portal.to_string(),
        decision: None,
    })
    .collect()
}

/// Records a decision; returns false for an unknown row.
pub fn decide(rows: &mut [MismatchRow], id: u32, decision: MismatchDecision) -> bool {
    match rows.iter_mut().find(|r| r.id == id) {
        Some(row) => {
            row.decision = Some(decision);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_vendor_itc;

    #[test]
    fn test_filter_vendors() {
        let vendors = a004_vendor_itc::fixtures();
        assert_eq!(filter_vendors(&vendors, "", false).len(), 5);
        assert_eq!(filter_vendors(&vendors, "", true).len(), 3);
        assert_eq!(filter_vendors(&vendors, "logistics", true).len(), 0);
        assert_eq!(filter_vendors(&vendors, "LOGISTICS", false).len(), 1);
    }

    #[test]
    fn test_vendor_contact_email() {
        let vendors = a004_vendor_itc::fixtures();
        let contact = VendorContact::for_vendor(&vendors[4]);
        assert_eq!(contact.email, "accounts@logisticsco..com");
    }

    #[test]
    fn test_utilization_sums_to_hundred() {
        let total: f64 = utilization().iter().map(|s| s.value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_decide() {
        let mut rows = mismatch_report();
        assert!(decide(&mut rows, 2, MismatchDecision::Rejected));
        assert_eq!(rows[1].decision, Some(MismatchDecision::Rejected));
        assert!(!decide(&mut rows, 9, MismatchDecision::Accepted));
    }
}
