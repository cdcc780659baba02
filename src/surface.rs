//! The chart surface the tooltip reads cursor and coordinate transforms from.
use iced::Size;
use indexmap::IndexMap;

use crate::{
    frame::AlignedFrame,
    scale::{Orientation, Scale},
};

/// Default name of the x scale.
pub const X_SCALE: &str = "x";
/// Default name of the y scale shared by all series.
pub const Y_SCALE: &str = "y";

/// Cursor offsets relative to the top-left of the plotting canvas.
///
/// Components are `None` until the engine has seen the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cursor {
    pub left: Option<f32>,
    pub top: Option<f32>,
}

impl Cursor {
    pub fn at(left: f32, top: f32) -> Self {
        Self {
            left: Some(left),
            top: Some(top),
        }
    }
}

/// Capabilities the tooltip consumes from the charting engine.
///
/// Series are numbered like the aligned frame: index 0 is the x domain and
/// series run from 1 to `series_count() - 1`.
pub trait ChartSurface {
    /// Current cursor position over the canvas.
    fn cursor(&self) -> Cursor;

    /// Index of the data point nearest to a horizontal canvas offset.
    fn pos_to_idx(&self, left: f32) -> Option<usize>;

    /// Canvas offset of `value` on the named scale.
    fn val_to_pos(&self, value: f64, scale: &str) -> Option<f32>;

    /// Value of the x domain at `idx`.
    fn x_value(&self, idx: usize) -> Option<f64>;

    /// Name of the scale the x domain is drawn on.
    fn x_scale(&self) -> &str;

    /// Number of series including the x domain.
    fn series_count(&self) -> usize;

    /// Value of `series` at `idx`; `None` for gaps.
    fn series_value(&self, series: usize, idx: usize) -> Option<f64>;

    /// Name of the scale `series` is drawn on.
    fn series_scale(&self, series: usize) -> &str;

    /// Vertical canvas offset halfway between the lowest and highest series
    /// value at `idx`. Used to anchor the tooltip when the cursor is above or
    /// below the canvas.
    ///
    /// Returns `None` when every series has a gap at `idx`.
    fn mid_point_y(&self, idx: usize) -> Option<f32> {
        let mut min: Option<(f64, usize)> = None;
        let mut max: Option<(f64, usize)> = None;

        for series in 1..self.series_count() {
            let Some(value) = self.series_value(series, idx) else {
                continue;
            };
            if min.is_none_or(|(m, _)| value < m) {
                min = Some((value, series));
            }
            if max.is_none_or(|(m, _)| value > m) {
                max = Some((value, series));
            }
        }

        let ((lo, lo_series), (hi, hi_series)) = (min?, max?);
        let lo_pos = self.val_to_pos(lo, self.series_scale(lo_series))?;
        let hi_pos = self.val_to_pos(hi, self.series_scale(hi_series))?;
        Some((lo_pos + hi_pos) / 2.0)
    }
}

/// A [`ChartSurface`] over an [`AlignedFrame`] with named scales.
///
/// By default the x scale spans the x domain and a single vertical `y` scale
/// spans all numeric series.
#[derive(Debug, Clone)]
pub struct PlotSurface<'a> {
    frame: &'a AlignedFrame,
    canvas: Size,
    cursor: Cursor,
    scales: IndexMap<String, Scale>,
    series_scales: Vec<String>,
}

impl<'a> PlotSurface<'a> {
    pub fn new(frame: &'a AlignedFrame, canvas: Size) -> Self {
        let mut scales = IndexMap::new();

        if let Some((min, max)) = frame
            .x_field()
            .and_then(|x| value_range(x.len(), |i| x.number_at(i)))
        {
            scales.insert(X_SCALE.to_string(), Scale::horizontal(min, max));
        }

        let y_range = frame
            .fields()
            .iter()
            .skip(1)
            .filter_map(|f| value_range(f.len(), |i| f.number_at(i)))
            .reduce(|(a_lo, a_hi), (b_lo, b_hi)| (a_lo.min(b_lo), a_hi.max(b_hi)));
        if let Some((min, max)) = y_range {
            scales.insert(Y_SCALE.to_string(), Scale::vertical(min, max));
        }

        let series_scales = (0..frame.fields().len())
            .map(|i| if i == 0 { X_SCALE } else { Y_SCALE }.to_string())
            .collect();

        Self {
            frame,
            canvas,
            cursor: Cursor::default(),
            scales,
            series_scales,
        }
    }

    /// Add or replace a named scale.
    pub fn with_scale(mut self, name: impl Into<String>, scale: Scale) -> Self {
        self.scales.insert(name.into(), scale);
        self
    }

    /// Draw `series` on the named scale.
    pub fn with_series_scale(mut self, series: usize, name: impl Into<String>) -> Self {
        if let Some(slot) = self.series_scales.get_mut(series) {
            *slot = name.into();
        }
        self
    }

    pub fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    fn dim(&self, scale: &Scale) -> f32 {
        match scale.orientation {
            Orientation::Horizontal => self.canvas.width,
            Orientation::Vertical => self.canvas.height,
        }
    }
}

impl ChartSurface for PlotSurface<'_> {
    fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn pos_to_idx(&self, left: f32) -> Option<usize> {
        let scale = self.scales.get(self.x_scale())?;
        let target = scale.pos_to_val(left, self.dim(scale))?;
        let x = self.frame.x_field()?;

        let mut nearest: Option<(usize, f64)> = None;
        for i in 0..x.len() {
            let Some(value) = x.number_at(i) else {
                continue;
            };
            let distance = (value - target).abs();
            if nearest.is_none_or(|(_, best)| distance < best) {
                nearest = Some((i, distance));
            }
        }
        nearest.map(|(i, _)| i)
    }

    fn val_to_pos(&self, value: f64, scale: &str) -> Option<f32> {
        let scale = self.scales.get(scale)?;
        scale.val_to_pos(value, self.dim(scale))
    }

    fn x_value(&self, idx: usize) -> Option<f64> {
        self.frame.x_field()?.number_at(idx)
    }

    fn x_scale(&self) -> &str {
        self.series_scales.first().map_or(X_SCALE, String::as_str)
    }

    fn series_count(&self) -> usize {
        self.frame.fields().len()
    }

    fn series_value(&self, series: usize, idx: usize) -> Option<f64> {
        if series == 0 {
            return None;
        }
        self.frame.field(series)?.number_at(idx)
    }

    fn series_scale(&self, series: usize) -> &str {
        self.series_scales
            .get(series)
            .map_or(Y_SCALE, String::as_str)
    }
}

fn value_range(len: usize, value: impl Fn(usize) -> Option<f64>) -> Option<(f64, f64)> {
    (0..len)
        .filter_map(value)
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
#[path = "surface_test.rs"]
mod tests;
