use serde::{Deserialize, Serialize};

use crate::domain::common::{contains_ignore_case, AggregateRoot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleKind {
    B2B,
    B2C,
    Export,
}

impl SaleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleKind::B2B => "B2B",
            SaleKind::B2C => "B2C",
            SaleKind::Export => "Export",
        }
    }
}

/// Outward supply from the sales register. Amounts are preformatted rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesInvoice {
    pub invoice_no: String,
    pub date: String,
    pub customer: String,
    #[serde(rename = "type")]
    pub kind: SaleKind,
    pub taxable_value: String,
    pub gst_amount: String,
    pub total_value: String,
}

impl AggregateRoot for SalesInvoice {
    type Id = u32;

    /// Sequence number taken from the invoice number suffix.
    fn id(&self) -> u32 {
        self.invoice_no
            .rsplit('-')
            .next()
            .and_then(|n| n.parse().ok())
            .unwrap_or_default()
    }

    fn code(&self) -> &str {
        &self.invoice_no
    }

    fn description(&self) -> &str {
        &self.customer
    }

    fn matches(&self, query: &str) -> bool {
        contains_ignore_case(&self.invoice_no, query)
            || contains_ignore_case(&self.customer, query)
            || contains_ignore_case(self.kind.as_str(), query)
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn element_name() -> &'static str {
        "Invoice"
    }

    fn list_name() -> &'static str {
        "Sales Register"
    }
}

pub fn fixtures() -> Vec<SalesInvoice> {
    let rows = [
        ("INV-2023-001", "2023-11-28", "Global Solutions Ltd.", SaleKind::B2B, "₹45,000", "₹8,100", "₹53,100"),
        ("INV-2023-002", "2023-11-28", "Ramesh Sharma", SaleKind::B2C, "₹1,200", "₹216", "₹1,416"),
        ("INV-2023-003", "2023-11-27", "Export Traders Inc.", SaleKind::Export, "₹75,000", "₹0", "₹75,000"),
        ("INV-2023-004", "2023-11-27", "Tech Innovations Pvt. Ltd.", SaleKind::B2B, "₹28,000", "₹5,040", "₹33,040"),
        ("INV-2023-005", "2023-11-26", "Priya Singh", SaleKind::B2C, "₹3,500", "₹630", "₹4,130"),
    ];
    rows.into_iter()
        .map(|(no, date, customer, kind, taxable, gst, total)| SalesInvoice {
            invoice_no: no.to_string(),
            date: date.to_string(),
            customer: customer.to_string(),
            kind,
            taxable_value: taxable.to_string(),
            gst_amount: gst.to_string(),
            total_value: total.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_invoice_number() {
        let rows = fixtures();
        assert_eq!(rows[0].id(), 1);
        assert_eq!(rows[4].id(), 5);
        assert!(rows[2].matches("export"));
    }
}
