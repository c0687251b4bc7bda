use serde::{Deserialize, Serialize};

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

impl IndicatorStatus {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            IndicatorStatus::Good => "good",
            IndicatorStatus::Bad => "bad",
            IndicatorStatus::Neutral => "neutral",
            IndicatorStatus::Warning => "warning",
        }
    }
}

/// Direction of the period-over-period change badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// A change label starting with `-` trends down.
    pub fn from_change(change: &str) -> Self {
        if change.trim_start().starts_with('-') {
            Trend::Down
        } else {
            Trend::Up
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Trend::Up => "trending-up",
            Trend::Down => "trending-down",
        }
    }
}

/// One KPI card. Values are preformatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub id: String,
    pub label: String,
    pub value: String,
    pub change: Option<String>,
    pub trend: Option<Trend>,
    pub subtext: Option<String>,
    pub status: IndicatorStatus,
    pub icon: String,
    /// Route opened when the card is clicked.
    pub link: Option<String>,
}

impl Indicator {
    pub fn new(id: &str, label: &str, value: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            value: value.to_string(),
            change: None,
            trend: None,
            subtext: None,
            status: IndicatorStatus::Neutral,
            icon: icon.to_string(),
            link: None,
        }
    }

    /// Change badge; the trend follows the sign of the label.
    pub fn with_change(mut self, change: &str) -> Self {
        self.trend = Some(Trend::from_change(change));
        self.change = Some(change.to_string());
        self
    }

    pub fn with_trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }

    pub fn with_subtext(mut self, subtext: &str) -> Self {
        self.subtext = Some(subtext.to_string());
        self
    }

    pub fn with_status(mut self, status: IndicatorStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_link(mut self, path: &str) -> Self {
        self.link = Some(path.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_from_change() {
        assert_eq!(Trend::from_change("+12.5% vs. last month"), Trend::Up);
        assert_eq!(Trend::from_change("-3.2% vs. last month"), Trend::Down);
        assert_eq!(Trend::from_change("8.2% MoM"), Trend::Up);
    }
}
