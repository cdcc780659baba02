//! Cursor focus tracking.
//!
//! [`CursorTracker`] listens to the engine's lifecycle hooks and keeps track of
//! the focused series, the focused data point and where the tooltip is anchored.
use std::{cell::RefCell, fmt, rc::Rc, sync::Arc};

use iced::{Point, Rectangle};
use serde::{Deserialize, Serialize};

use crate::{
    hooks::{HookEvent, HookKind, Hooks, Subscription},
    position::position_tooltip,
    surface::ChartSurface,
};

/// How the panel shares its cursor with other panels on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorSync {
    #[default]
    Off,
    /// Every panel draws the crosshair, only the hovered one shows a tooltip.
    Crosshair,
    Tooltip,
}

/// What the pointer is focused on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CursorState {
    /// Focused series; never the x domain (index 0).
    pub focused_series: Option<usize>,
    /// Data point nearest to the cursor.
    pub focused_point: Option<usize>,
    /// Nearest data point for each series, indexed like the frame's fields.
    pub focused_points: Vec<Option<usize>>,
    pub pointer_inside: bool,
}

/// What a custom interpolator wants done with the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorUpdate {
    Clear,
    /// Recompute the anchor from the current cursor position.
    Reposition,
    Keep,
}

/// Result of a custom interpolation for one cursor update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpolation {
    pub series: Option<usize>,
    pub point: Option<usize>,
    pub anchor: AnchorUpdate,
}

/// Resolves focus from a cursor update for chart families with their own
/// notion of "nearest point".
pub type TooltipInterpolator = Arc<dyn Fn(&dyn ChartSurface) -> Interpolation + Send + Sync>;

/// Strategy turning engine events into focus and anchor.
#[derive(Clone, Default)]
pub enum CursorResolver {
    /// Focus comes from the engine's series and legend hooks.
    #[default]
    Default,
    /// Focus comes from the interpolator on every cursor update.
    Custom(TooltipInterpolator),
}

impl fmt::Debug for CursorResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl CursorResolver {
    pub fn custom<F>(interpolator: F) -> Self
    where
        F: Fn(&dyn ChartSurface) -> Interpolation + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(interpolator))
    }

    /// Hooks the tracker subscribes to under this resolver.
    pub fn hook_kinds(&self) -> &'static [HookKind] {
        const SHARED: &[HookKind] = &[
            HookKind::Init,
            HookKind::Enter,
            HookKind::Leave,
            HookKind::SyncRect,
            HookKind::SetCursor,
        ];
        const DEFAULT: &[HookKind] = &[
            HookKind::Init,
            HookKind::Enter,
            HookKind::Leave,
            HookKind::SyncRect,
            HookKind::SetCursor,
            HookKind::SetSeries,
            HookKind::SetLegend,
        ];
        match self {
            Self::Default => DEFAULT,
            Self::Custom(_) => SHARED,
        }
    }
}

/// Markers the tracker puts on the surface root for styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceMarkers {
    /// The pointer is over this plot.
    pub plot_active: bool,
    /// The plot takes part in a shared crosshair.
    pub shared_crosshair: bool,
}

#[derive(Debug, Default)]
struct TrackerInner {
    state: CursorState,
    bounds: Option<Rectangle>,
    anchor: Option<Point>,
    markers: SurfaceMarkers,
    /// Live [`Attachment`]s.
    attachments: usize,
}

/// Tracks cursor focus over one chart surface.
///
/// Cloning yields another handle to the same state.
#[derive(Debug, Clone, Default)]
pub struct CursorTracker {
    sync: CursorSync,
    resolver: CursorResolver,
    inner: Rc<RefCell<TrackerInner>>,
}

impl CursorTracker {
    pub fn new(sync: CursorSync, resolver: CursorResolver) -> Self {
        Self {
            sync,
            resolver,
            inner: Rc::default(),
        }
    }

    /// Subscribe to `hooks`. Listeners stay registered while the returned
    /// [`Attachment`] is alive.
    #[must_use = "dropping the attachment detaches the tracker"]
    pub fn attach(&self, hooks: &Hooks) -> Attachment {
        let subscriptions = self
            .resolver
            .hook_kinds()
            .iter()
            .map(|&kind| {
                let tracker = self.clone();
                hooks.subscribe(kind, move |event, surface| {
                    tracker.handle_event(event, surface)
                })
            })
            .collect();

        let attachments = {
            let mut inner = self.inner.borrow_mut();
            inner.attachments += 1;
            inner.attachments
        };
        tracing::debug!(
            resolver = ?self.resolver,
            sync = ?self.sync,
            attachments,
            "cursor tracker attached"
        );

        Attachment {
            inner: Rc::clone(&self.inner),
            subscriptions,
        }
    }

    /// Apply one engine event.
    pub fn handle_event(&self, event: &HookEvent, surface: &dyn ChartSurface) {
        // The interpolator may read this tracker, so it runs before the state is borrowed.
        let interpolation = match (event, &self.resolver) {
            (HookEvent::SetCursor, CursorResolver::Custom(interpolate)) if self.is_attached() => {
                Some(interpolate(surface))
            }
            _ => None,
        };
        let series_count = surface.series_count();
        let mut inner = self.inner.borrow_mut();

        match event {
            HookEvent::Init => {
                inner.state = CursorState::default();
                inner.anchor = None;
                if self.sync == CursorSync::Crosshair {
                    inner.markers.shared_crosshair = true;
                }
                return;
            }
            HookEvent::SyncRect(bounds) => {
                inner.bounds = Some(*bounds);
                return;
            }
            _ => {}
        }

        if inner.attachments == 0 {
            tracing::trace!(kind = ?event.kind(), "tracker detached, event ignored");
            return;
        }

        match (event, &self.resolver) {
            (HookEvent::Enter, _) => {
                inner.state.pointer_inside = true;
                inner.markers.plot_active = true;
            }
            (HookEvent::Leave, _) => {
                inner.anchor = None;
                inner.state.pointer_inside = false;
                inner.markers.plot_active = false;
            }
            (HookEvent::SetCursor, CursorResolver::Default) => {
                let Some(bounds) = inner.bounds else {
                    tracing::trace!("no plotting bounds yet, anchor skipped");
                    return;
                };
                inner.anchor = position_tooltip(surface, &bounds).point();
            }
            (HookEvent::SetCursor, CursorResolver::Custom(_)) => {
                let Some(interpolation) = interpolation else {
                    return;
                };
                set_focus(
                    &mut inner.state,
                    interpolation.series,
                    interpolation.point,
                    series_count,
                );
                match interpolation.anchor {
                    AnchorUpdate::Clear => inner.anchor = None,
                    AnchorUpdate::Reposition => {
                        let bounds = inner.bounds;
                        match bounds.and_then(|b| position_tooltip(surface, &b).point()) {
                            Some(anchor) => inner.anchor = Some(anchor),
                            None if bounds.is_none() => {
                                tracing::trace!("no plotting bounds yet, anchor skipped")
                            }
                            None => {}
                        }
                    }
                    AnchorUpdate::Keep => {}
                }
            }
            (HookEvent::SetSeries(series), CursorResolver::Default) => {
                let point = inner.state.focused_point;
                set_focus(&mut inner.state, *series, point, series_count);
            }
            (HookEvent::SetLegend { idx, idxs }, CursorResolver::Default) => {
                let series = inner.state.focused_series;
                set_focus(&mut inner.state, series, *idx, series_count);
                inner.state.focused_points = idxs.clone();
            }
            (event, CursorResolver::Custom(_)) => {
                tracing::trace!(kind = ?event.kind(), "handled by the custom interpolator");
            }
            (HookEvent::Init | HookEvent::SyncRect(_), CursorResolver::Default) => {}
        }
    }

    pub fn state(&self) -> CursorState {
        self.inner.borrow().state.clone()
    }

    /// Current anchor in viewport coordinates, if both components resolved.
    pub fn anchor(&self) -> Option<Point> {
        self.inner.borrow().anchor
    }

    /// Last plotting area reported by the engine.
    pub fn bounds(&self) -> Option<Rectangle> {
        self.inner.borrow().bounds
    }

    pub fn markers(&self) -> SurfaceMarkers {
        self.inner.borrow().markers
    }

    pub fn sync(&self) -> CursorSync {
        self.sync
    }

    pub fn resolver(&self) -> &CursorResolver {
        &self.resolver
    }

    pub fn is_attached(&self) -> bool {
        self.inner.borrow().attachments > 0
    }

    /// Whether a tooltip may be shown at all.
    ///
    /// Needs a resolved data point. With a shared crosshair only the panel
    /// under the pointer shows one, so stale focus on the other panels stays hidden.
    pub fn has_focus(&self) -> bool {
        let inner = self.inner.borrow();
        if inner.state.focused_point.is_none() {
            return false;
        }
        self.sync != CursorSync::Crosshair || inner.state.pointer_inside
    }
}

/// Series outside `1..series_count` (the x domain or a missing field) are
/// stored as no series.
fn set_focus(
    state: &mut CursorState,
    series: Option<usize>,
    point: Option<usize>,
    series_count: usize,
) {
    let series = series.filter(|&s| s != 0 && s < series_count);
    if state.focused_series != series || state.focused_point != point {
        tracing::debug!(?series, ?point, "tooltip focus changed");
    }
    state.focused_series = series;
    state.focused_point = point;
}

/// Keeps a [`CursorTracker`] subscribed to the engine hooks.
///
/// Dropping it removes its listeners. When the last attachment of a tracker
/// goes, the anchor is cleared and the tracker stops handling events.
#[derive(Debug)]
pub struct Attachment {
    inner: Rc<RefCell<TrackerInner>>,
    subscriptions: Vec<Subscription>,
}

impl Drop for Attachment {
    fn drop(&mut self) {
        self.subscriptions.clear();
        let mut inner = self.inner.borrow_mut();
        inner.attachments = inner.attachments.saturating_sub(1);
        if inner.attachments == 0 {
            inner.anchor = None;
            tracing::debug!("cursor tracker detached");
        }
    }
}

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tests;
