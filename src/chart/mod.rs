//! Expense Charts
//!
//! Chart surfaces for the daily, monthly and yearly totals, and the reshaping
//! of summary sequences into chart-ready series.
//!
//! The server sends every summary sequence newest first. Charts read left to
//! right, so [`ChartSeries::chronological`] reverses the order before the
//! labels and values are split apart.

pub mod layout;

pub use layout::{smooth_segments, CurveSegment, Plot, PlotArea, PlotPoint};

use serde::{Deserialize, Serialize};

use crate::api::{Aggregate, Summary};

/// The three summary charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Daily,
    Monthly,
    Yearly,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Daily, ChartKind::Monthly, ChartKind::Yearly];

    /// Dataset label before the first summary arrives
    pub fn initial_label(self) -> &'static str {
        match self {
            ChartKind::Daily => "Daily",
            ChartKind::Monthly => "Monthly",
            ChartKind::Yearly => "Yearly",
        }
    }

    /// Dataset label once the chart shows summary data
    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Daily => "Daily Expenses",
            ChartKind::Monthly => "Monthly Expenses",
            ChartKind::Yearly => "Yearly Expenses",
        }
    }

    /// DOM id of the canvas the chart draws on
    pub fn canvas_id(self) -> &'static str {
        match self {
            ChartKind::Daily => "dailyChart",
            ChartKind::Monthly => "monthlyChart",
            ChartKind::Yearly => "yearlyChart",
        }
    }

    /// The series for this chart, oldest period first
    pub fn series_from(self, summary: &Summary) -> ChartSeries {
        match self {
            ChartKind::Daily => ChartSeries::chronological(&summary.daily),
            ChartKind::Monthly => ChartSeries::chronological(&summary.monthly),
            ChartKind::Yearly => ChartSeries::chronological(&summary.yearly),
        }
    }
}

/// How a chart's line is drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// CSS colour of the line
    pub stroke_color: String,
    /// Fill the area beneath the line
    pub fill: bool,
    /// Bézier curve tension, 0 draws straight segments
    pub tension: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            stroke_color: "rgba(0,123,255,0.7)".to_string(),
            fill: false,
            tension: 0.1,
        }
    }
}

/// Parallel x-axis labels and y-axis values.
///
/// Only built from (label, value) pairs, so both sides always have the same
/// length and index `i` of one belongs to index `i` of the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl ChartSeries {
    /// Build a series from pairs, keeping their order
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let (labels, values) = pairs
            .into_iter()
            .map(|(label, value)| (label.into(), value))
            .unzip();

        Self { labels, values }
    }

    /// Build a series from aggregates sent newest first, so that the result
    /// runs oldest to newest
    pub fn chronological<T: Aggregate>(aggregates: &[T]) -> Self {
        Self::from_pairs(
            aggregates
                .iter()
                .rev()
                .map(|aggregate| (aggregate.period(), aggregate.total())),
        )
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// A line chart with a single dataset.
///
/// Created once at start-up and updated in place on every summary refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSurface {
    kind: ChartKind,
    label: String,
    series: ChartSeries,
    style: ChartStyle,
    revision: u64,
}

impl ChartSurface {
    /// An empty chart carrying its initial label
    pub fn new(kind: ChartKind, style: ChartStyle) -> Self {
        Self {
            kind,
            label: kind.initial_label().to_string(),
            series: ChartSeries::default(),
            style,
            revision: 0,
        }
    }

    /// Replace the dataset label and data
    pub fn update(&mut self, label: &str, series: ChartSeries) {
        self.label = label.to_string();
        self.series = series;
        self.revision += 1;
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Number of updates applied since construction
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{DailyTotal, MonthlyTotal, YearlyTotal};

    fn daily(date: &str, total: f64) -> DailyTotal {
        DailyTotal {
            date: date.to_string(),
            total,
        }
    }

    #[test]
    fn test_chronological_reverses_server_order() {
        let aggregates = vec![
            daily("2024-01-03", 12.0),
            daily("2024-01-02", 7.5),
            daily("2024-01-01", 3.25),
        ];

        let series = ChartSeries::chronological(&aggregates);

        assert_eq!(series.labels(), ["2024-01-01", "2024-01-02", "2024-01-03"]);
        assert_eq!(series.values(), [3.25, 7.5, 12.0]);
    }

    #[test]
    fn test_chronological_empty() {
        let series = ChartSeries::chronological::<DailyTotal>(&[]);

        assert!(series.is_empty());
        assert_eq!(series.values().len(), 0);
    }

    #[test]
    fn test_series_from_uses_field_per_granularity() {
        let summary = Summary {
            daily: vec![daily("2024-03-02", 1.0)],
            monthly: vec![
                MonthlyTotal {
                    month: "2024-03".to_string(),
                    total: 20.0,
                },
                MonthlyTotal {
                    month: "2024-02".to_string(),
                    total: 15.0,
                },
            ],
            yearly: vec![YearlyTotal {
                year: "2024".to_string(),
                total: 35.0,
            }],
        };

        assert_eq!(ChartKind::Daily.series_from(&summary).labels(), ["2024-03-02"]);
        assert_eq!(
            ChartKind::Monthly.series_from(&summary).labels(),
            ["2024-02", "2024-03"]
        );
        assert_eq!(ChartKind::Yearly.series_from(&summary).values(), [35.0]);
    }

    #[test]
    fn test_surface_starts_empty_with_initial_label() {
        let surface = ChartSurface::new(ChartKind::Monthly, ChartStyle::default());

        assert_eq!(surface.label(), "Monthly");
        assert!(surface.series().is_empty());
        assert_eq!(surface.revision(), 0);
        assert_eq!(surface.style().stroke_color, "rgba(0,123,255,0.7)");
        assert!(!surface.style().fill);
    }

    #[test]
    fn test_surface_update_overrides_label() {
        let mut surface = ChartSurface::new(ChartKind::Yearly, ChartStyle::default());

        surface.update(
            ChartKind::Yearly.title(),
            ChartSeries::from_pairs([("2023", 4.0), ("2024", 9.0)]),
        );

        assert_eq!(surface.label(), "Yearly Expenses");
        assert_eq!(surface.series().len(), 2);
        assert_eq!(surface.revision(), 1);
    }
}
