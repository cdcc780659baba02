//! Tooltip anchoring relative to the plotting canvas.
use glam::Vec2;
use iced::{Point, Rectangle};

use crate::surface::{ChartSurface, Cursor};

/// Viewport coordinates at which a tooltip is anchored.
///
/// Either component may be unresolved; nothing should render unless both are set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TooltipAnchor {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl TooltipAnchor {
    pub const NONE: Self = Self { x: None, y: None };

    fn at(position: Vec2) -> Self {
        Self {
            x: Some(position.x),
            y: Some(position.y),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }

    /// The anchor as a point, when both components are resolved.
    pub fn point(&self) -> Option<Point> {
        Some(Point::new(self.x?, self.y?))
    }
}

/// Whether the cursor has wandered off the plotting canvas.
///
/// A cursor the engine has not placed yet counts as inside.
pub fn is_cursor_outside_canvas(cursor: Cursor, bounds: &Rectangle) -> bool {
    let (Some(left), Some(top)) = (cursor.left, cursor.top) else {
        return false;
    };
    left < 0.0 || left > bounds.width || top < 0.0 || top > bounds.height
}

/// Given the cursor position over `surface`, figure out where the tooltip
/// goes. `bounds` is the plotting area in viewport coordinates.
///
/// Inside the canvas the anchor follows the cursor. Above or below the
/// canvas it snaps to the nearest data point: vertically to the series
/// mid-point and horizontally to the data x position. Left or right of the
/// canvas (including the corners) there is no anchor.
pub fn position_tooltip(surface: &dyn ChartSurface, bounds: &Rectangle) -> TooltipAnchor {
    let cursor = surface.cursor();
    let offset = Vec2::new(cursor.left.unwrap_or(0.0), cursor.top.unwrap_or(0.0));
    let origin = Vec2::new(bounds.x, bounds.y);

    if !is_cursor_outside_canvas(cursor, bounds) {
        return TooltipAnchor::at(origin + offset);
    }

    // Only vertical overflow has a fallback.
    let horizontal_overflow = offset.x < 0.0 || offset.x > bounds.width;
    if horizontal_overflow || (offset.y >= 0.0 && offset.y <= bounds.height) {
        return TooltipAnchor::NONE;
    }

    let Some(idx) = surface.pos_to_idx(offset.x) else {
        return TooltipAnchor::NONE;
    };
    let Some(mid) = surface.mid_point_y(idx) else {
        return TooltipAnchor::NONE;
    };

    let x = surface
        .x_value(idx)
        .and_then(|value| surface.val_to_pos(value, surface.x_scale()))
        .map(|pos| origin.x + pos);

    TooltipAnchor {
        x,
        y: Some(origin.y + mid),
    }
}

#[cfg(test)]
#[path = "position_test.rs"]
mod tests;
