//! Chart series and the SVG geometry the frontend draws from them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    Line,
    Area,
    Pie,
    Donut,
}

impl ChartKind {
    pub const CARTESIAN: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Line, ChartKind::Area];
    pub const RADIAL: [ChartKind; 3] = [ChartKind::Pie, ChartKind::Donut, ChartKind::Bar];

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar Chart",
            ChartKind::Line => "Line Chart",
            ChartKind::Area => "Area Chart",
            ChartKind::Pie => "Pie Chart",
            ChartKind::Donut => "Donut Chart",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar-chart",
            ChartKind::Line => "line-chart",
            ChartKind::Area => "activity",
            ChartKind::Pie => "pie-chart",
            ChartKind::Donut => "circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: &str, color: &str, values: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            values,
        }
    }
}

/// Labels on the x axis plus one or more series of the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

/// Drawing area inside the SVG view box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for Plot {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            left: 56.0,
            top: 16.0,
            right: 16.0,
            bottom: 32.0,
        }
    }
}

impl Plot {
    pub fn inner_width(&self) -> f64 {
        self.width - self.left - self.right
    }

    pub fn inner_height(&self) -> f64 {
        self.height - self.top - self.bottom
    }

    pub fn baseline(&self) -> f64 {
        self.top + self.inner_height()
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub series: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub y: f64,
    pub label: String,
}

/// Rounds up to 1, 2 or 5 times a power of ten.
pub fn nice_ceiling(value: f64) -> f64 {
    if value <= 0.0 || !value.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .find(|m| m * magnitude >= value)
        .unwrap_or(10.0);
    step * magnitude
}

/// `45000` -> `45K`, `1850000` -> `1.9M`.
pub fn compact_number(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1_000_000.0 {
        (value / 1_000_000.0, "M")
    } else if abs >= 1_000.0 {
        (value / 1_000.0, "K")
    } else {
        (value, "")
    };
    if (scaled - scaled.round()).abs() < 0.05 {
        format!("{}{}", scaled.round(), suffix)
    } else {
        format!("{:.1}{}", scaled, suffix)
    }
}

impl ChartData {
    pub fn new(labels: &[&str], series: Vec<Series>) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            series,
        }
    }

    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }

    pub fn scale_max(&self) -> f64 {
        nice_ceiling(self.max_value())
    }

    fn slot_width(&self, plot: &Plot) -> f64 {
        plot.inner_width() / self.labels.len().max(1) as f64
    }

    fn y_for(&self, plot: &Plot, value: f64) -> f64 {
        plot.baseline() - value / self.scale_max() * plot.inner_height()
    }

    /// Center x of every label slot.
    pub fn label_positions(&self, plot: &Plot) -> Vec<(f64, String)> {
        let slot = self.slot_width(plot);
        self.labels
            .iter()
            .enumerate()
            .map(|(i, l)| (plot.left + slot * (i as f64 + 0.5), l.clone()))
            .collect()
    }

    /// Five evenly spaced y-axis ticks from zero to the scale maximum.
    pub fn ticks(&self, plot: &Plot) -> Vec<AxisTick> {
        let max = self.scale_max();
        (0..=4)
            .map(|i| {
                let value = max * i as f64 / 4.0;
                AxisTick {
                    y: self.y_for(plot, value),
                    label: compact_number(value),
                }
            })
            .collect()
    }

    /// Grouped bars, series side by side within each label slot.
    pub fn bars(&self, plot: &Plot) -> Vec<BarRect> {
        let slot = self.slot_width(plot);
        let group = slot * 0.7;
        let count = self.series.len().max(1) as f64;
        let bar_width = group / count;
        let mut rects = Vec::new();
        for (s, series) in self.series.iter().enumerate() {
            for (i, value) in series.values.iter().enumerate() {
                let x = plot.left + slot * i as f64 + (slot - group) / 2.0 + bar_width * s as f64;
                let y = self.y_for(plot, *value);
                rects.push(BarRect {
                    series: s,
                    x,
                    y,
                    width: bar_width,
                    height: plot.baseline() - y,
                });
            }
        }
        rects
    }

    pub fn points(&self, plot: &Plot, series: usize) -> Vec<(f64, f64)> {
        let slot = self.slot_width(plot);
        self.series
            .get(series)
            .map(|s| {
                s.values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (plot.left + slot * (i as f64 + 0.5), self.y_for(plot, *v)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `points` attribute of an SVG polyline.
    pub fn polyline(&self, plot: &Plot, series: usize) -> String {
        self.points(plot, series)
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Closed path from the line down to the baseline.
    pub fn area_path(&self, plot: &Plot, series: usize) -> String {
        let points = self.points(plot, series);
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return String::new();
        };
        let mut path = format!("M{:.1},{:.1}", first.0, plot.baseline());
        for (x, y) in &points {
            path.push_str(&format!(" L{x:.1},{y:.1}"));
        }
        path.push_str(&format!(" L{:.1},{:.1} Z", last.0, plot.baseline()));
        path
    }
}

/// One share of a pie or donut chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub color: String,
    pub value: f64,
}

impl Slice {
    pub fn new(label: &str, color: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            color: color.to_string(),
            value,
        }
    }
}

/// SVG arc paths centered at `(cx, cy)`. `inner_radius` of zero draws a pie.
pub fn slice_paths(slices: &[Slice], cx: f64, cy: f64, radius: f64, inner_radius: f64) -> Vec<String> {
    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let point = |r: f64, angle: f64| (cx + r * angle.sin(), cy - r * angle.cos());
    let mut start = 0.0f64;
    slices
        .iter()
        .map(|slice| {
            // a full circle cannot be drawn as one arc
            let sweep = (slice.value.max(0.0) / total * std::f64::consts::TAU).min(std::f64::consts::TAU - 1e-4);
            let end = start + sweep;
            let large = if sweep > std::f64::consts::PI { 1 } else { 0 };
            let (x0, y0) = point(radius, start);
            let (x1, y1) = point(radius, end);
            let path = if inner_radius > 0.0 {
                let (x2, y2) = point(inner_radius, end);
                let (x3, y3) = point(inner_radius, start);
                format!(
                    "M{x0:.2},{y0:.2} A{radius},{radius} 0 {large} 1 {x1:.2},{y1:.2} L{x2:.2},{y2:.2} A{inner_radius},{inner_radius} 0 {large} 0 {x3:.2},{y3:.2} Z"
                )
            } else {
                format!("M{cx},{cy} L{x0:.2},{y0:.2} A{radius},{radius} 0 {large} 1 {x1:.2},{y1:.2} Z")
            };
            start = end;
            path
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> ChartData {
        ChartData::new(
            &["Jan", "Feb"],
            vec![
                Series::new("Income", "#6366f1", vec![45000.0, 32000.0]),
                Series::new("Expense", "#ec4899", vec![28000.0, 30000.0]),
            ],
        )
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(45000.0), 50000.0);
        assert_eq!(nice_ceiling(2_100_000.0), 5_000_000.0);
        assert_eq!(nice_ceiling(100.0), 100.0);
        assert_eq!(nice_ceiling(0.0), 1.0);
    }

    #[test]
    fn test_compact_number() {
        assert_eq!(compact_number(45000.0), "45K");
        assert_eq!(compact_number(1_850_000.0), "1.9M");
        assert_eq!(compact_number(0.0), "0");
    }

    #[test]
    fn test_bars_stay_inside_plot() {
        let plot = Plot::default();
        let bars = data().bars(&plot);
        assert_eq!(bars.len(), 4);
        for bar in &bars {
            assert!(bar.x >= plot.left);
            assert!(bar.x + bar.width <= plot.width - plot.right + 1e-9);
            assert!(bar.y >= plot.top - 1e-9);
            assert!((bar.y + bar.height - plot.baseline()).abs() < 1e-9);
        }
        // 45000 of 50000
        assert!((bars[0].height - plot.inner_height() * 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_line_and_area() {
        let plot = Plot::default();
        let data = data();
        assert_eq!(data.points(&plot, 1).len(), 2);
        assert!(data.points(&plot, 7).is_empty());
        assert_eq!(data.polyline(&plot, 0).split(' ').count(), 2);
        let area = data.area_path(&plot, 0);
        assert!(area.starts_with('M') && area.ends_with('Z'));
    }

    #[test]
    fn test_slices() {
        let slices = [
            Slice::new("Eligible", "#10b981", 75.0),
            Slice::new("Pending", "#f59e0b", 15.0),
            Slice::new("Ineligible", "#ef4444", 10.0),
        ];
        assert_eq!(slice_paths(&slices, 100.0, 100.0, 80.0, 0.0).len(), 3);
        let donut = slice_paths(&slices, 100.0, 100.0, 80.0, 50.0);
        assert!(donut[0].contains(" 0 1 1 "));
        assert!(slice_paths(&[], 0.0, 0.0, 1.0, 0.0).is_empty());
    }
}
