use serde::{Deserialize, Serialize};

use crate::domain::common::{contains_ignore_case, AggregateRoot};

/// Input tax credit claimed per supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorItc {
    pub id: u32,
    pub name: String,
    pub gstin: String,
    pub total: String,
    pub eligible: String,
    pub ineligible: String,
}

impl VendorItc {
    /// A vendor with a non-zero ineligible amount needs review.
    pub fn has_ineligible(&self) -> bool {
        self.ineligible.chars().any(|c| c.is_ascii_digit() && c != '0')
    }
}

impl AggregateRoot for VendorItc {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn code(&self) -> &str {
        &self.gstin
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn matches(&self, query: &str) -> bool {
        contains_ignore_case(&self.name, query) || contains_ignore_case(&self.gstin, query)
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn element_name() -> &'static str {
        "Vendor"
    }

    fn list_name() -> &'static str {
        "Vendor ITC"
    }
}

pub fn fixtures() -> Vec<VendorItc> {
    let rows = [
        ("Global Suppliers Ltd.", "27AABCZ1234N1Z2", "₹ 500,000", "₹ 490,000", "₹ 10,000"),
        ("Tech Solutions Pvt. Ltd.", "27ZYXWJ5678Q1Z5", "₹ 320,000", "₹ 320,000", "₹ 0"),
        ("Office Supplies Inc.", "27PQRST6789R1Z1", "₹ 150,000", "₹ 145,000", "₹ 5,000"),
        ("Marketing Innovations", "27LMNOC1122S1Z3", "₹ 80,000", "₹ 75,000", "₹ 5,000"),
        ("Logistics Co.", "27DEFGH3344T1Z7", "₹ 120,000", "₹ 120,000", "₹ 0"),
    ];
    rows.into_iter()
        .zip(1..)
        .map(|((name, gstin, total, eligible, ineligible), id)| VendorItc {
            id,
            name: name.to_string(),
            gstin: gstin.to_string(),
            total: total.to_string(),
            eligible: eligible.to_string(),
            ineligible: ineligible.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ineligible_flag() {
        let rows = fixtures();
        assert!(rows[0].has_ineligible());
        assert!(!rows[1].has_ineligible());
        assert_eq!(rows.iter().filter(|v| v.has_ineligible()).count(), 3);
    }
}
