//! The tooltip plugin: focus tracking, options and content behind one
//! "should render" gate.
use std::fmt;

use iced::{Point, Vector};

use crate::{
    content::{TooltipContent, TooltipRenderer, resolve_content},
    frame::AlignedFrame,
    hooks::Hooks,
    options::{OptionsError, TooltipMode, TooltipOptions},
    tracker::{Attachment, CursorState, CursorTracker},
};

/// Distance in pixels between the anchor and the tooltip's top-left corner.
pub const TOOLTIP_OFFSET: f32 = 10.0;

/// Everything a presentation sink needs to draw the tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipView {
    /// Viewport position the tooltip follows.
    pub anchor: Point,
    pub offset: Vector,
    pub content: TooltipContent,
}

impl TooltipView {
    /// Top-left corner of the tooltip.
    pub fn position(&self) -> Point {
        self.anchor + self.offset
    }
}

/// Tooltip for one chart panel.
///
/// Build with [`crate::TooltipPluginBuilder`], then [`attach`](Self::attach)
/// it to the engine's hooks for as long as the panel is mounted.
#[derive(Default)]
pub struct TooltipPlugin {
    pub(crate) tracker: CursorTracker,
    pub(crate) options: TooltipOptions,
    pub(crate) single_only: bool,
    pub(crate) renderer: Option<TooltipRenderer>,
}

impl fmt::Debug for TooltipPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TooltipPlugin")
            .field("tracker", &self.tracker)
            .field("options", &self.options)
            .field("single_only", &self.single_only)
            .field("renderer", &self.renderer.as_ref().map(|_| ".."))
            .finish()
    }
}

impl TooltipPlugin {
    #[must_use = "dropping the attachment detaches the tooltip"]
    pub fn attach(&self, hooks: &Hooks) -> Attachment {
        self.tracker.attach(hooks)
    }

    pub fn tracker(&self) -> &CursorTracker {
        &self.tracker
    }

    pub fn state(&self) -> CursorState {
        self.tracker.state()
    }

    pub fn options(&self) -> TooltipOptions {
        self.options
    }

    pub fn mode(&self) -> TooltipMode {
        self.options.mode
    }

    /// Switch the display mode. Single-series panels only accept Single and Hidden.
    pub fn set_mode(&mut self, mode: TooltipMode) -> Result<(), OptionsError> {
        check_mode(mode, self.single_only)?;
        if self.options.mode != mode {
            tracing::debug!(from = %self.options.mode, to = %mode, "tooltip mode changed");
        }
        self.options.mode = mode;
        Ok(())
    }

    /// Content for the current focus, regardless of whether it would be shown.
    pub fn content(&self, frame: &AlignedFrame) -> Option<TooltipContent> {
        resolve_content(
            frame,
            &self.tracker.state(),
            self.options.mode,
            self.renderer.as_ref(),
        )
    }

    /// The tooltip to draw, or `None` when nothing should render: no focus,
    /// no content or no anchor.
    pub fn view(&self, frame: &AlignedFrame) -> Option<TooltipView> {
        if !self.tracker.has_focus() {
            return None;
        }
        let content = self.content(frame)?;
        let anchor = self.tracker.anchor()?;
        Some(TooltipView {
            anchor,
            offset: Vector::new(TOOLTIP_OFFSET, TOOLTIP_OFFSET),
            content,
        })
    }
}

pub(crate) fn check_mode(mode: TooltipMode, single_only: bool) -> Result<(), OptionsError> {
    if single_only && !matches!(mode, TooltipMode::Single | TooltipMode::None) {
        return Err(OptionsError::UnsupportedMode(mode));
    }
    Ok(())
}

#[cfg(test)]
#[path = "plugin_test.rs"]
mod tests;
