//! Quick GST estimate from a taxable value and a slab rate.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GstRate {
    Five,
    Twelve,
    #[default]
    Eighteen,
    TwentyEight,
}

impl GstRate {
    pub const ALL: [GstRate; 4] = [GstRate::Five, GstRate::Twelve, GstRate::Eighteen, GstRate::TwentyEight];

    pub fn percent(&self) -> u32 {
        match self {
            GstRate::Five => 5,
            GstRate::Twelve => 12,
            GstRate::Eighteen => 18,
            GstRate::TwentyEight => 28,
        }
    }

    pub fn label(&self) -> String {
        format!("{}%", self.percent())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxEstimate {
    pub gst_amount: f64,
    pub total: f64,
}

impl TaxEstimate {
    pub fn gst_label(&self) -> String {
        format!("{:.2}", self.gst_amount)
    }

    pub fn total_label(&self) -> String {
        format!("{:.2}", self.total)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `gst = taxable * rate / 100`, both figures rounded to 2 decimals.
/// Blank or non-numeric input estimates to zero.
pub fn estimate(taxable: &str, rate: GstRate) -> TaxEstimate {
    let taxable = taxable
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0);
    let gst_amount = round2(taxable * f64::from(rate.percent()) / 100.0);
    TaxEstimate {
        gst_amount,
        total: round2(taxable + gst_amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate_is_eighteen() {
        assert_eq!(GstRate::default().percent(), 18);
    }

    #[test]
    fn test_estimate() {
        let e = estimate("10000", GstRate::Eighteen);
        assert_eq!(e.gst_label(), "1800.00");
        assert_eq!(e.total_label(), "11800.00");

        let e = estimate("999.99", GstRate::Five);
        assert_eq!(e.gst_label(), "50.00");
        assert_eq!(e.total_label(), "1049.99");
    }

    #[test]
    fn test_blank_and_invalid_input() {
        assert_eq!(estimate("", GstRate::TwentyEight).total_label(), "0.00");
        assert_eq!(estimate("abc", GstRate::Twelve).gst_label(), "0.00");
    }
}
