//! Cumulative distribution charts over histogram bucket fields.
//!
//! A bucket field carries a `name` label starting with `le`. The first bucket
//! field holds the total count and the others hold the count at or below
//! their `le` boundary.
use iced::Color;

use crate::{
    frame::{AlignedFrame, Field},
    scale::Distribution,
};

pub const LE_PREFIX: &str = "le";
/// `name` label of the field whose mean caps the y scale.
pub const P999: &str = "P999";
pub const NO_BUCKETS_MESSAGE: &str = "no fields whose labels.name starts with 'le'";

pub const CHART_WIDTH: f32 = 360.0;
pub const CHART_HEIGHT: f32 = 240.0;
/// Reserved width for the value axes.
pub const AXIS_SIZE: f32 = 60.0;

const DEFAULT_Y_MAX: f64 = 100.0;
/// Boundary used when a bucket has no parseable `le` label.
const UNKNOWN_BOUNDARY: f64 = -99.0;

const GRID: Color = Color {
    r: 0x3f as f32 / 255.0,
    g: 0x3f as f32 / 255.0,
    b: 0x3f as f32 / 255.0,
    a: 1.0,
};
const CYAN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};
const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// One point of the cumulative distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketPoint {
    /// Upper bound of the bucket.
    pub boundary: f64,
    /// Share of the total at or below `boundary`, in percent.
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartScale {
    pub name: &'static str,
    /// Fixed range; auto-ranged from the data when `None`.
    pub range: Option<(f64, f64)>,
    pub distribution: Distribution,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartAxis {
    pub scale: &'static str,
    pub side: AxisSide,
    pub stroke: Color,
    pub grid: Option<Color>,
    pub size: Option<f32>,
    /// Tick values are shortened with [`compact_axis_value`].
    pub compact_values: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartCurve {
    pub label: &'static str,
    pub scale: &'static str,
    pub stroke: Color,
    pub width: f32,
}

/// A small chart shown inside the tooltip.
///
/// `data[0]` holds the x values; `data[i]` holds the values of `curves[i - 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipChart {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub scales: Vec<ChartScale>,
    pub axes: Vec<ChartAxis>,
    pub curves: Vec<ChartCurve>,
    pub data: Vec<Vec<f64>>,
}

/// Fields whose `name` label starts with `le`, in frame order.
pub fn bucket_fields(frame: &AlignedFrame) -> Vec<&Field> {
    frame
        .fields()
        .iter()
        .filter(|f| f.label("name").is_some_and(|n| n.starts_with(LE_PREFIX)))
        .collect()
}

/// Cumulative percentages of `buckets[1..]` against the total in `buckets[0]`
/// at `point`, sorted by boundary.
///
/// Buckets whose percentage is not a finite number are left out.
pub fn cumulative_buckets(buckets: &[&Field], point: usize) -> Vec<BucketPoint> {
    let Some((total, rest)) = buckets.split_first() else {
        return Vec::new();
    };
    let total = total.number_at(point);

    let mut points: Vec<BucketPoint> = rest
        .iter()
        .filter_map(|field| {
            let percent = field.number_at(point)? / total? * 100.0;
            percent.is_finite().then(|| BucketPoint {
                boundary: boundary(field),
                percent,
            })
        })
        .collect();
    points.sort_by(|a, b| a.boundary.total_cmp(&b.boundary));
    points
}

fn boundary(field: &Field) -> f64 {
    field
        .label(LE_PREFIX)
        .and_then(|le| le.trim().parse::<f64>().ok())
        .filter(|b| !b.is_nan())
        .unwrap_or(UNKNOWN_BOUNDARY)
}

/// Top of the y scale: the mean of the `P999` field if the frame has one.
pub fn y_max(frame: &AlignedFrame) -> f64 {
    let Some(field) = frame.fields().iter().find(|f| f.label("name") == Some(P999)) else {
        return DEFAULT_Y_MAX;
    };
    let values: Vec<f64> = (0..field.len()).filter_map(|i| field.number_at(i)).collect();
    if values.is_empty() {
        return DEFAULT_Y_MAX;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// CDF chart of the bucket fields at `point`, or `None` when the frame has
/// fewer than two bucket fields.
///
/// `log_overlay` adds the same curve on a logarithmic scale to the right.
pub fn cdf_chart(
    frame: &AlignedFrame,
    point: usize,
    title: impl Into<String>,
    log_overlay: bool,
) -> Option<TooltipChart> {
    let buckets = bucket_fields(frame);
    if buckets.len() < 2 {
        tracing::debug!(buckets = buckets.len(), "not enough bucket fields for a CDF");
        return None;
    }

    let points = cumulative_buckets(&buckets, point);
    let percents: Vec<f64> = points.iter().map(|p| p.percent).collect();
    let boundaries: Vec<f64> = points.iter().map(|p| p.boundary).collect();

    let x_axis = ChartAxis {
        scale: "x",
        side: AxisSide::Bottom,
        stroke: Color::WHITE,
        grid: Some(GRID),
        size: None,
        compact_values: false,
    };
    let y_axis = ChartAxis {
        scale: "y",
        side: AxisSide::Left,
        stroke: if log_overlay { CYAN } else { Color::WHITE },
        grid: Some(GRID),
        size: Some(AXIS_SIZE),
        compact_values: true,
    };
    let cdf = ChartCurve {
        label: "CDF",
        scale: "y",
        stroke: CYAN,
        width: if log_overlay { 1.5 } else { 2.0 },
    };

    let mut chart = TooltipChart {
        title: title.into(),
        width: CHART_WIDTH,
        height: CHART_HEIGHT,
        scales: vec![
            ChartScale {
                name: "x",
                range: Some((0.0, 100.0)),
                distribution: Distribution::Linear,
            },
            ChartScale {
                name: "y",
                range: Some((0.0, y_max(frame))),
                distribution: Distribution::Linear,
            },
        ],
        axes: vec![x_axis, y_axis],
        curves: vec![cdf],
        data: vec![percents, boundaries.clone()],
    };

    if log_overlay {
        chart.scales.push(ChartScale {
            name: "y2",
            range: None,
            distribution: Distribution::Log { base: 10.0 },
        });
        chart.axes.push(ChartAxis {
            scale: "y2",
            side: AxisSide::Right,
            stroke: YELLOW,
            grid: None,
            size: Some(AXIS_SIZE),
            compact_values: true,
        });
        chart.curves.push(ChartCurve {
            label: "logCDF",
            scale: "y2",
            stroke: YELLOW,
            width: 1.5,
        });
        chart.data.push(boundaries);
    }

    Some(chart)
}

/// Shorten an axis tick: `1500` becomes `1.5K`, `2e9` becomes `2Bil`.
pub fn compact_axis_value(value: f64) -> String {
    if value >= 1e9 {
        format!("{}Bil", value / 1e9)
    } else if value >= 1e6 {
        format!("{}Mil", value / 1e6)
    } else if value >= 1e3 {
        format!("{}K", value / 1e3)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
#[path = "histogram_test.rs"]
mod tests;
