use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    /// CSS modifier for the severity badge.
    pub fn css_modifier(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceAlert {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub period: String,
    pub severity: Severity,
}

impl AggregateRoot for ComplianceAlert {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn code(&self) -> &str {
        &self.kind
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn element_name() -> &'static str {
        "Compliance Alert"
    }

    fn list_name() -> &'static str {
        "Compliance Alerts"
    }
}

pub fn fixtures() -> Vec<ComplianceAlert> {
    let rows = [
        ("GSTR-3B Filing", "Missing GSTR-3B for July 2023", "July 2023", Severity::Critical),
        ("Vendor Filing", "Vendor GSTIN X not filed GSTR-1 for August 2023", "August 2023", Severity::High),
        ("ITC Mismatch", "ITC mismatch detected in GSTR-2A vs Purchase Register", "September 2023", Severity::Medium),
        ("ITC Reversal", "Input tax credit reversal required for non-payment to vendor", "Q2 FY23-24", Severity::High),
        ("Tax Discrepancy", "Tax liability discrepancy identified for Q3", "Q3 FY23-24", Severity::Medium),
        ("Export Docs", "Incomplete documentation for exports", "October 2023", Severity::Low),
    ];
    rows.into_iter()
        .zip(1..)
        .map(|((kind, description, period, severity), id)| ComplianceAlert {
            id,
            kind: kind.to_string(),
            description: description.to_string(),
            period: period.to_string(),
            severity,
        })
        .collect()
}
