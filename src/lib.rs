//! Cursor focus tracking and tooltip positioning for plot panels.
//!
//! - Follows the charting engine's lifecycle hooks to track the focused series and data point
//! - Anchors the tooltip to the plotting canvas, snapping to the data when the cursor leaves it vertically
//! - Resolves table, histogram CDF or custom content and draws it as an iced overlay
//!
//! Quick start:
//!
//! ```ignore
//! let plugin = TooltipPluginBuilder::new()
//!     .with_mode(TooltipMode::Multi)
//!     .with_sync(CursorSync::Crosshair)
//!     .build()?;
//!
//! // Keep the attachment alive for as long as the panel is mounted.
//! let _attachment = plugin.attach(&hooks);
//!
//! hooks.emit(&HookEvent::SyncRect(bounds), &surface);
//! hooks.emit(&HookEvent::SetCursor, &surface);
//!
//! if let Some(view) = plugin.view(&frame) {
//!     overlay = tooltip_overlay(&view);
//! }
//! ```
pub mod content;
pub mod frame;
pub mod histogram;
pub mod hooks;
pub mod options;
pub mod plugin;
pub mod plugin_builder;
pub mod position;
pub mod scale;
pub mod style;
pub mod surface;
pub mod tracker;
pub mod view;

// Iced re-exports.
pub use iced::{Color, Point, Rectangle};

// Re-exports of public types.
pub use content::{SeriesRow, TooltipContent, TooltipRenderer, resolve_content};
pub use frame::{AlignedFrame, Field, FieldConfig, FieldType, FrameError, HideFrom, Value};
pub use histogram::{TooltipChart, compact_axis_value};
pub use hooks::{HookEvent, HookKind, Hooks, Subscription};
pub use options::{ModeChoice, OptionsError, TooltipMode, TooltipOptions, tooltip_mode_choices};
pub use plugin::{TOOLTIP_OFFSET, TooltipPlugin, TooltipView};
pub use plugin_builder::TooltipPluginBuilder;
pub use position::{TooltipAnchor, is_cursor_outside_canvas, position_tooltip};
pub use scale::{Distribution, Scale};
pub use style::StyleConfig;
pub use surface::{ChartSurface, Cursor, PlotSurface};
pub use tracker::{
    AnchorUpdate, Attachment, CursorResolver, CursorState, CursorSync, CursorTracker,
    Interpolation, TooltipInterpolator,
};
pub use view::tooltip_overlay;
