//! Editable invoice in the "Create New Invoice" dialog.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::tax::GstRate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Customer name is required")]
    MissingCustomer,
    #[error("Add at least one item with a quantity and rate")]
    NoItems,
    #[error("Line {0} has an invalid quantity or rate")]
    InvalidLine(usize),
}

/// Raw text of one item row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftLine {
    pub description: String,
    pub quantity: String,
    pub rate: String,
}

fn parse_amount(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

impl DraftLine {
    /// Blank quantity counts as 1, matching the field placeholder.
    fn quantity_value(&self) -> Option<f64> {
        if self.quantity.trim().is_empty() {
            Some(1.0)
        } else {
            parse_amount(&self.quantity)
        }
    }

    pub fn total(&self) -> Option<f64> {
        Some(self.quantity_value()? * parse_amount(&self.rate)?)
    }

    pub fn is_blank(&self) -> bool {
        self.description.trim().is_empty() && self.quantity.trim().is_empty() && self.rate.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub gst: f64,
    pub total: f64,
}

pub fn rupees(amount: f64) -> String {
    format!("₹ {amount:.2}")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub customer: String,
    pub date: String,
    pub lines: Vec<DraftLine>,
    pub rate: GstRate,
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self {
            customer: String::new(),
            date: String::new(),
            lines: vec![DraftLine::default()],
            rate: GstRate::Eighteen,
        }
    }
}

impl InvoiceDraft {
    pub fn add_line(&mut self) {
        self.lines.push(DraftLine::default());
    }

    /// The last remaining row is cleared instead of removed.
    pub fn remove_line(&mut self, index: usize) {
        if index >= self.lines.len() {
            return;
        }
        if self.lines.len() == 1 {
            self.lines[0] = DraftLine::default();
        } else {
            self.lines.remove(index);
        }
    }

    pub fn line_mut(&mut self, index: usize) -> Option<&mut DraftLine> {
        self.lines.get_mut(index)
    }

    /// Invalid lines contribute nothing until corrected.
    pub fn totals(&self) -> InvoiceTotals {
        let subtotal: f64 = self.lines.iter().filter_map(DraftLine::total).sum();
        let subtotal = (subtotal * 100.0).round() / 100.0;
        let gst = (subtotal * f64::from(self.rate.percent())).round() / 100.0;
        InvoiceTotals {
            subtotal,
            gst,
            total: subtotal + gst,
        }
    }

    pub fn validate(&self) -> Result<InvoiceTotals, DraftError> {
        if self.customer.trim().is_empty() {
            return Err(DraftError::MissingCustomer);
        }
        for (i, line) in self.lines.iter().enumerate() {
            if !line.is_blank() && line.total().is_none() {
                return Err(DraftError::InvalidLine(i + 1));
            }
        }
        let totals = self.totals();
        if totals.subtotal <= 0.0 {
            return Err(DraftError::NoItems);
        }
        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(description: &str, quantity: &str, rate: &str) -> DraftLine {
        DraftLine {
            description: description.into(),
            quantity: quantity.into(),
            rate: rate.into(),
        }
    }

    #[test]
    fn test_empty_draft_totals_zero() {
        let draft = InvoiceDraft::default();
        assert_eq!(draft.lines.len(), 1);
        let totals = draft.totals();
        assert_eq!(rupees(totals.total), "₹ 0.00");
        assert_eq!(draft.validate(), Err(DraftError::MissingCustomer));
    }

    #[test]
    fn test_totals_with_gst() {
        let mut draft = InvoiceDraft {
            customer: "Global Solutions Ltd.".into(),
            ..Default::default()
        };
        draft.lines[0] = line("Web Design Services", "2", "1500");
        draft.add_line();
        *draft.line_mut(1).unwrap() = line("Hosting", "", "999.5");

        let totals = draft.validate().unwrap();
        assert_eq!(rupees(totals.subtotal), "₹ 3999.50");
        assert_eq!(rupees(totals.gst), "₹ 719.91");
        assert_eq!(rupees(totals.total), "₹ 4719.41");
    }

    #[test]
    fn test_invalid_and_empty_lines() {
        let mut draft = InvoiceDraft {
            customer: "Priya Singh".into(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err(DraftError::NoItems));

        draft.lines[0] = line("Consulting", "two", "100");
        assert_eq!(draft.validate(), Err(DraftError::InvalidLine(1)));
        assert_eq!(draft.totals().subtotal, 0.0);
    }

    #[test]
    fn test_remove_line_keeps_one_row() {
        let mut draft = InvoiceDraft::default();
        draft.lines[0] = line("A", "1", "10");
        draft.remove_line(0);
        assert_eq!(draft.lines, vec![DraftLine::default()]);

        draft.add_line();
        draft.remove_line(1);
        assert_eq!(draft.lines.len(), 1);
        draft.remove_line(5);
        assert_eq!(draft.lines.len(), 1);
    }
}
