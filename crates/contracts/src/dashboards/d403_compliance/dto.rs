use serde::{Deserialize, Serialize};

pub const COMPLIANCE_SCORE: u32 = 82;
pub const HEALTH_TEXT: &str =
    "Your compliance score is good, but attend to the pending GSTR-3B filing to reach excellent status.";
pub const SCORE_GATE_TEXT: &str =
    "Get AI-driven compliance scores and actionable insights. Available on Business & CA plans.";

/// Length of the half-circle gauge arc in view-box units.
pub const GAUGE_ARC: f64 = 126.0;

/// `stroke-dashoffset` of the gauge for a 0..=100 score.
pub fn gauge_offset(score: u32) -> f64 {
    GAUGE_ARC - GAUGE_ARC * f64::from(score.min(100)) / 100.0
}

pub fn score_rating(score: u32) -> &'static str {
    match score {
        90.. => "Excellent",
        75..=89 => "Good",
        50..=74 => "Fair",
        _ => "Poor",
    }
}

pub fn health_metrics() -> Vec<(&'static str, &'static str)> {
    vec![("95%", "On-Time Filing"), ("2.5%", "ITC Mismatch"), ("0", "Notices")]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineState {
    Done,
    Pending,
    Upcoming,
}

impl TimelineState {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            TimelineState::Done => "done",
            TimelineState::Pending => "pending",
            TimelineState::Upcoming => "upcoming",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: String,
    pub title: String,
    pub note: String,
    pub state: TimelineState,
}

pub fn filing_timeline() -> Vec<TimelineEntry> {
    [
        ("11 Jun", "GSTR-1 Filed", "Successfully submitted for May 2024", TimelineState::Done),
        ("20 Jun", "GSTR-3B Due", "Prepare liability offset", TimelineState::Pending),
        ("10 Jul", "GSTR-2A Gen", "Auto-drafted statement", TimelineState::Upcoming),
    ]
    .into_iter()
    .map(|(date, title, note, state)| TimelineEntry {
        date: date.to_string(),
        title: title.to_string(),
        note: note.to_string(),
        state,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_offset() {
        assert_eq!(gauge_offset(0), 126.0);
        assert_eq!(gauge_offset(100), 0.0);
        assert_eq!(gauge_offset(250), 0.0);
        assert!((gauge_offset(COMPLIANCE_SCORE) - 22.68).abs() < 1e-9);
    }

    #[test]
    fn test_score_rating() {
        assert_eq!(score_rating(COMPLIANCE_SCORE), "Good");
        assert_eq!(score_rating(95), "Excellent");
        assert_eq!(score_rating(10), "Poor");
    }
}
