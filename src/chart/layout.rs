//! Chart Layout
//!
//! Canvas-independent geometry for a category line chart: where each point
//! goes, what the y-axis covers, and the Bézier segments of a smoothed line.
//! The browser renderer turns the result into canvas calls.

use super::ChartSeries;

/// Number of horizontal grid intervals on the y-axis
pub const Y_TICK_COUNT: usize = 5;

/// Canvas size and the margins reserved for axis labels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl PlotArea {
    /// A canvas of the given size with the default margins
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin_left: 60.0,
            margin_right: 20.0,
            margin_top: 20.0,
            margin_bottom: 40.0,
        }
    }

    pub fn chart_width(&self) -> f64 {
        (self.width - self.margin_left - self.margin_right).max(0.0)
    }

    pub fn chart_height(&self) -> f64 {
        (self.height - self.margin_top - self.margin_bottom).max(0.0)
    }

    /// Y coordinate of the bottom edge of the plotting region
    pub fn baseline(&self) -> f64 {
        self.margin_top + self.chart_height()
    }
}

/// One data point placed on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value: f64,
}

/// A y-axis grid line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YTick {
    pub y: f64,
    pub value: f64,
}

/// Cubic Bézier segment between two consecutive points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSegment {
    pub from: (f64, f64),
    pub control1: (f64, f64),
    pub control2: (f64, f64),
    pub to: (f64, f64),
}

/// A series laid out on a [`PlotArea`]
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    pub area: PlotArea,
    pub points: Vec<PlotPoint>,
    pub y_min: f64,
    pub y_max: f64,
    pub y_ticks: Vec<YTick>,
}

impl Plot {
    /// Lay out `series` with evenly spaced categories along the x-axis
    pub fn new(series: &ChartSeries, area: PlotArea) -> Self {
        let (y_min, y_max) = value_range(series.values());

        let count = series.len();
        let points = series
            .iter()
            .enumerate()
            .map(|(i, (label, value))| PlotPoint {
                x: category_x(&area, i, count),
                y: value_y(&area, value, y_min, y_max),
                label: label.to_string(),
                value,
            })
            .collect();

        let y_ticks = (0..=Y_TICK_COUNT)
            .map(|i| {
                let fraction = i as f64 / Y_TICK_COUNT as f64;
                YTick {
                    y: area.margin_top + fraction * area.chart_height(),
                    value: y_max - fraction * (y_max - y_min),
                }
            })
            .collect();

        Self {
            area,
            points,
            y_min,
            y_max,
            y_ticks,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The smoothed line through the points
    pub fn segments(&self, tension: f64) -> Vec<CurveSegment> {
        let coordinates: Vec<(f64, f64)> = self.points.iter().map(|p| (p.x, p.y)).collect();
        smooth_segments(&coordinates, tension)
    }
}

/// Y-axis range with 10% padding, widened to ±1 around a flat series
fn value_range(values: &[f64]) -> (f64, f64) {
    let finite = values.iter().copied().filter(|v| v.is_finite());

    let (mut min, mut max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if min > max {
        // No data: show a unit range around zero
        return (-1.0, 1.0);
    }

    let range = max - min;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
    min -= padding;
    max += padding;

    (min, max)
}

fn category_x(area: &PlotArea, index: usize, count: usize) -> f64 {
    if count <= 1 {
        return area.margin_left + area.chart_width() / 2.0;
    }

    area.margin_left + (index as f64 / (count - 1) as f64) * area.chart_width()
}

fn value_y(area: &PlotArea, value: f64, y_min: f64, y_max: f64) -> f64 {
    if !value.is_finite() {
        return area.baseline();
    }

    // Canvas y grows downward
    area.margin_top + ((y_max - value) / (y_max - y_min)) * area.chart_height()
}

/// Split a polyline into Bézier segments smoothed with the given tension.
///
/// Each point gets a pair of control points on the line parallel to its
/// neighbours' chord, offset in proportion to the distance to each
/// neighbour. A tension of 0 puts every control point on its anchor, which
/// draws straight segments.
pub fn smooth_segments(points: &[(f64, f64)], tension: f64) -> Vec<CurveSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let controls: Vec<((f64, f64), (f64, f64))> = (0..points.len())
        .map(|i| {
            let previous = points[i.saturating_sub(1)];
            let current = points[i];
            let next = points[(i + 1).min(points.len() - 1)];
            control_points(previous, current, next, tension)
        })
        .collect();

    points
        .windows(2)
        .enumerate()
        .map(|(i, pair)| CurveSegment {
            from: pair[0],
            control1: controls[i].1,
            control2: controls[i + 1].0,
            to: pair[1],
        })
        .collect()
}

/// Control points before and after `current`
fn control_points(
    previous: (f64, f64),
    current: (f64, f64),
    next: (f64, f64),
    tension: f64,
) -> ((f64, f64), (f64, f64)) {
    let d01 = distance(previous, current);
    let d12 = distance(current, next);

    let total = d01 + d12;
    let (s01, s12) = if total > 0.0 {
        (d01 / total, d12 / total)
    } else {
        (0.0, 0.0)
    };

    let fa = tension * s01;
    let fb = tension * s12;

    let dx = next.0 - previous.0;
    let dy = next.1 - previous.1;

    (
        (current.0 - fa * dx, current.1 - fa * dy),
        (current.0 + fb * dx, current.1 + fb * dy),
    )
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_points_spread_across_chart_width() {
        let series = ChartSeries::from_pairs([("a", 1.0), ("b", 2.0), ("c", 3.0)]);
        let area = PlotArea::new(480.0, 260.0);

        let plot = Plot::new(&series, area);

        assert_eq!(plot.points.len(), 3);
        assert!(approx(plot.points[0].x, 60.0));
        assert!(approx(plot.points[1].x, 260.0));
        assert!(approx(plot.points[2].x, 460.0));
        // Larger values sit higher on the canvas
        assert!(plot.points[2].y < plot.points[0].y);
    }

    #[test]
    fn test_single_point_is_centered() {
        let series = ChartSeries::from_pairs([("2024", 10.0)]);
        let area = PlotArea::new(480.0, 260.0);

        let plot = Plot::new(&series, area);

        assert!(approx(plot.points[0].x, 260.0));
        assert!(approx(plot.y_min, 9.0));
        assert!(approx(plot.y_max, 11.0));
    }

    #[test]
    fn test_value_range_has_ten_percent_padding() {
        let series = ChartSeries::from_pairs([("a", 0.0), ("b", 100.0)]);

        let plot = Plot::new(&series, PlotArea::new(400.0, 300.0));

        assert!(approx(plot.y_min, -10.0));
        assert!(approx(plot.y_max, 110.0));
        assert_eq!(plot.y_ticks.len(), Y_TICK_COUNT + 1);
        assert!(approx(plot.y_ticks[0].value, 110.0));
        assert!(approx(plot.y_ticks[Y_TICK_COUNT].value, -10.0));
    }

    #[test]
    fn test_empty_series() {
        let plot = Plot::new(&ChartSeries::default(), PlotArea::new(400.0, 300.0));

        assert!(plot.is_empty());
        assert!(plot.segments(0.1).is_empty());
        assert!(approx(plot.y_min, -1.0));
        assert!(approx(plot.y_max, 1.0));
    }

    #[test]
    fn test_zero_tension_draws_straight_segments() {
        let points = [(0.0, 0.0), (10.0, 5.0), (20.0, 0.0)];

        let segments = smooth_segments(&points, 0.0);

        assert_eq!(segments.len(), 2);
        for segment in segments {
            assert_eq!(segment.control1, segment.from);
            assert_eq!(segment.control2, segment.to);
        }
    }

    #[test]
    fn test_collinear_points_keep_controls_on_the_line() {
        let points = [(0.0, 0.0), (10.0, 10.0), (20.0, 20.0)];

        let segments = smooth_segments(&points, 0.4);

        for segment in segments {
            assert!(approx(segment.control1.0, segment.control1.1));
            assert!(approx(segment.control2.0, segment.control2.1));
        }
    }

    #[test]
    fn test_tension_pulls_controls_toward_neighbours() {
        let points = [(0.0, 10.0), (10.0, 0.0), (20.0, 10.0)];

        let segments = smooth_segments(&points, 0.1);

        // Middle point: chord is horizontal, so its control points only move along x
        assert!(approx(segments[0].control2.0, 9.0));
        assert!(approx(segments[0].control2.1, 0.0));
        assert!(approx(segments[1].control1.0, 11.0));
    }
}
