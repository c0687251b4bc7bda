use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissingInvoiceStatus {
    Missing,
    Pending,
    Resolved,
}

impl MissingInvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingInvoiceStatus::Missing => "Missing",
            MissingInvoiceStatus::Pending => "Pending",
            MissingInvoiceStatus::Resolved => "Resolved",
        }
    }
}

/// Purchase invoice present in the books but absent from GSTR-2B.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingInvoice {
    pub id: u32,
    pub number: String,
    pub vendor_gstin: String,
    pub date: String,
    pub amount: String,
    pub status: MissingInvoiceStatus,
}

impl AggregateRoot for MissingInvoice {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn code(&self) -> &str {
        &self.number
    }

    fn description(&self) -> &str {
        &self.vendor_gstin
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn element_name() -> &'static str {
        "Missing Invoice"
    }

    fn list_name() -> &'static str {
        "Missing Invoices"
    }
}

pub fn fixtures() -> Vec<MissingInvoice> {
    let rows = [
        ("INV0012345", "27ABCDA1234A1Z1", "2023-10-15", "₹ 12,500", MissingInvoiceStatus::Missing),
        ("INV0012346", "27ABCDA1234A1Z1", "2023-10-18", "₹ 8,900", MissingInvoiceStatus::Pending),
        ("INV0012347", "27BCDEF5678B1Z2", "2023-11-01", "₹ 25,000", MissingInvoiceStatus::Missing),
        ("INV0012348", "27CDEFG9012C1Z3", "2023-11-05", "₹ 5,200", MissingInvoiceStatus::Resolved),
        ("INV0012349", "27FGHIJ3456D1Z4", "2023-11-10", "₹ 18,750", MissingInvoiceStatus::Missing),
    ];
    rows.into_iter()
        .zip(1..)
        .map(|((number, gstin, date, amount, status), id)| MissingInvoice {
            id,
            number: number.to_string(),
            vendor_gstin: gstin.to_string(),
            date: date.to_string(),
            amount: amount.to_string(),
            status,
        })
        .collect()
}
