//! What the tooltip shows for the current focus.
use std::sync::Arc;

use iced::Color;

use crate::{
    frame::{AlignedFrame, FALLBACK_COLOR, FieldType},
    histogram::{NO_BUCKETS_MESSAGE, TooltipChart, cdf_chart},
    options::TooltipMode,
    tracker::CursorState,
};

/// One line of the series table.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRow {
    pub color: Color,
    pub label: String,
    /// Formatted value; `None` when the series has no point under the cursor.
    pub value: Option<String>,
    pub is_active: bool,
}

/// Resolved tooltip payload, ready for a presentation sink.
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipContent {
    /// Formatted x value followed by one row per series.
    Table {
        timestamp: String,
        rows: Vec<SeriesRow>,
    },
    Chart(TooltipChart),
    /// A message explaining why there is nothing to chart.
    Empty(String),
}

/// Custom tooltip rendering. Receives the aligned frame, the focused series
/// and the focused data point.
pub type TooltipRenderer =
    Arc<dyn Fn(&AlignedFrame, Option<usize>, Option<usize>) -> Option<TooltipContent> + Send + Sync>;

/// Build the tooltip content for `state`.
///
/// A custom `renderer` replaces the built-in modes entirely.
pub fn resolve_content(
    frame: &AlignedFrame,
    state: &CursorState,
    mode: TooltipMode,
    renderer: Option<&TooltipRenderer>,
) -> Option<TooltipContent> {
    let point = state.focused_point?;
    let Some(x_field) = frame.x_field() else {
        tracing::debug!("frame has no x field");
        return None;
    };

    if let Some(render) = renderer {
        return render(frame, state.focused_series, Some(point));
    }

    let timestamp = x_field
        .display_value(point)
        .map(|d| d.text)
        .unwrap_or_default();

    match mode {
        TooltipMode::Single => {
            let series = state.focused_series.filter(|&s| s != 0)?;
            let row = series_row(frame, series, Some(point), false)?;
            Some(TooltipContent::Table {
                timestamp,
                rows: vec![row],
            })
        }
        TooltipMode::Multi => {
            let rows = frame
                .fields()
                .iter()
                .enumerate()
                .skip(1)
                .filter(|(_, f)| {
                    f.field_type == FieldType::Number
                        && !f.config.hide_from.tooltip
                        && !f.config.hide_from.viz
                })
                .filter_map(|(i, _)| {
                    let idx = state.focused_points.get(i).copied().flatten();
                    series_row(frame, i, idx, state.focused_series == Some(i))
                })
                .collect();
            Some(TooltipContent::Table { timestamp, rows })
        }
        TooltipMode::Detailed | TooltipMode::Detailed2 => {
            let log_overlay = mode == TooltipMode::Detailed2;
            Some(match cdf_chart(frame, point, timestamp, log_overlay) {
                Some(chart) => TooltipContent::Chart(chart),
                None => TooltipContent::Empty(NO_BUCKETS_MESSAGE.to_string()),
            })
        }
        TooltipMode::Detailed3 | TooltipMode::None => None,
    }
}

fn series_row(
    frame: &AlignedFrame,
    series: usize,
    point: Option<usize>,
    is_active: bool,
) -> Option<SeriesRow> {
    let field = frame.field(series)?;
    let display = point.and_then(|p| field.display_value(p));
    Some(SeriesRow {
        color: display
            .as_ref()
            .and_then(|d| d.color)
            .or(field.config.color)
            .unwrap_or(FALLBACK_COLOR),
        label: field.display_name(),
        value: display.map(|d| d.formatted()),
        is_active,
    })
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
