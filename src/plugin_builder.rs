use std::sync::Arc;

use crate::{
    content::{TooltipContent, TooltipRenderer},
    frame::AlignedFrame,
    options::{OptionsError, TooltipMode, TooltipOptions},
    plugin::{TooltipPlugin, check_mode},
    surface::ChartSurface,
    tracker::{CursorResolver, CursorSync, CursorTracker, Interpolation},
};

/// Builder for configuring and constructing a [`TooltipPlugin`].
///
/// # Example
///
/// ```ignore
/// let plugin = TooltipPluginBuilder::new()
///     .with_mode_name("multi")
///     .with_sync(CursorSync::Crosshair)
///     .build()?;
/// let _attachment = plugin.attach(&hooks);
/// ```
#[derive(Default)]
pub struct TooltipPluginBuilder {
    mode: Option<TooltipMode>,
    mode_name: Option<String>,
    single_only: bool,
    sync: CursorSync,
    resolver: CursorResolver,
    renderer: Option<TooltipRenderer>,
}

impl TooltipPluginBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from persisted panel options.
    pub fn with_options(mut self, options: TooltipOptions) -> Self {
        self.mode = Some(options.mode);
        self
    }

    pub fn with_mode(mut self, mode: TooltipMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the mode by its option value, e.g. `"detailed2"`. Parsed on build.
    pub fn with_mode_name(mut self, name: impl Into<String>) -> Self {
        self.mode_name = Some(name.into());
        self
    }

    /// Restrict the panel to the Single and Hidden modes.
    pub fn single_only(mut self, single_only: bool) -> Self {
        self.single_only = single_only;
        self
    }

    pub fn with_sync(mut self, sync: CursorSync) -> Self {
        self.sync = sync;
        self
    }

    /// Resolve focus with a custom interpolator instead of the engine's
    /// series and legend hooks.
    pub fn with_interpolator<F>(mut self, interpolator: F) -> Self
    where
        F: Fn(&dyn ChartSurface) -> Interpolation + Send + Sync + 'static,
    {
        self.resolver = CursorResolver::custom(interpolator);
        self
    }

    /// Render tooltip content yourself; the display mode is ignored.
    pub fn with_renderer<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&AlignedFrame, Option<usize>, Option<usize>) -> Option<TooltipContent>
            + Send
            + Sync
            + 'static,
    {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Build the plugin. A mode name takes precedence over a mode value.
    pub fn build(self) -> Result<TooltipPlugin, OptionsError> {
        let mode = match self.mode_name {
            Some(name) => name.parse()?,
            None => self.mode.unwrap_or_default(),
        };
        check_mode(mode, self.single_only)?;

        Ok(TooltipPlugin {
            tracker: CursorTracker::new(self.sync, self.resolver),
            options: TooltipOptions::new(mode),
            single_only: self.single_only,
            renderer: self.renderer,
        })
    }
}

#[cfg(test)]
#[path = "plugin_builder_test.rs"]
mod tests;
