//! Draws a [`TooltipView`] as an iced overlay.
use iced::widget::{Column, column, container, row, text};
use iced::{Color, Element, Font, Length, Padding, Theme, alignment, font};

use crate::{
    content::{SeriesRow, TooltipContent},
    histogram::TooltipChart,
    plugin::TooltipView,
};

const TOOLTIP_ALPHA: f32 = 0.7;
const TEXT_SIZE: f32 = 12.0;
const SWATCH_SIZE: f32 = 12.0;

fn tooltip_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(
            palette
                .background
                .weak
                .color
                .scale_alpha(TOOLTIP_ALPHA)
                .into(),
        ),
        text_color: Some(palette.background.weak.text),
        border: iced::border::rounded(2),
        ..container::Style::default()
    }
}

/// A full-size transparent layer with the tooltip bubble placed at the
/// view's position. Stack it on top of the chart.
pub fn tooltip_overlay<'a, Message: 'a>(view: &'a TooltipView) -> Element<'a, Message> {
    let position = view.position();

    let bubble = container(tooltip_body(&view.content))
        .padding(6.0)
        .style(tooltip_style);

    container(bubble)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: position.y,
            left: position.x,
            ..Padding::ZERO
        })
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Top)
        .style(container::transparent)
        .into()
}

fn tooltip_body<'a, Message: 'a>(content: &'a TooltipContent) -> Element<'a, Message> {
    match content {
        TooltipContent::Table { timestamp, rows } => {
            let mut col = column![text(timestamp).size(TEXT_SIZE)].spacing(4.0);
            for series in rows {
                col = col.push(series_row(series));
            }
            col.into()
        }
        TooltipContent::Chart(chart) => chart_summary(chart).into(),
        TooltipContent::Empty(message) => text(message).size(TEXT_SIZE).into(),
    }
}

fn series_row<'a, Message: 'a>(series: &'a SeriesRow) -> Element<'a, Message> {
    let font = if series.is_active {
        Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        }
    } else {
        Font::DEFAULT
    };

    row![
        swatch(series.color),
        text(&series.label).size(TEXT_SIZE).font(font),
        text(series.value.as_deref().unwrap_or_default())
            .size(TEXT_SIZE)
            .font(font),
    ]
    .spacing(4.0)
    .width(Length::Shrink)
    .into()
}

/// Title plus one line per curve with its value range.
fn chart_summary<'a, Message: 'a>(chart: &'a TooltipChart) -> Column<'a, Message> {
    let mut col = column![text(&chart.title).size(TEXT_SIZE)].spacing(4.0);

    for (curve, values) in chart.curves.iter().zip(chart.data.iter().skip(1)) {
        let range = values
            .iter()
            .copied()
            .reduce(f64::min)
            .zip(values.iter().copied().reduce(f64::max));
        let summary = match range {
            Some((lo, hi)) => format!("{}: {lo} to {hi}", curve.label),
            None => format!("{}: no data", curve.label),
        };
        col = col.push(
            row![
                swatch(curve.stroke),
                text(summary).size(TEXT_SIZE).color(curve.stroke)
            ]
            .spacing(4.0),
        );
    }
    col
}

fn swatch<'a, Message: 'a>(color: Color) -> Element<'a, Message> {
    container("")
        .width(Length::Fixed(SWATCH_SIZE))
        .height(Length::Fixed(SWATCH_SIZE))
        .style(move |_| color.into())
        .into()
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
