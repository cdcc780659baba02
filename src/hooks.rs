//! Lifecycle hooks emitted by the charting engine.
//!
//! Listeners are registered per [`HookKind`] and stay registered for as long
//! as the returned [`Subscription`] is alive.
use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use iced::Rectangle;
use indexmap::IndexMap;

use crate::surface::ChartSurface;

/// The hooks a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    Init,
    Enter,
    Leave,
    SyncRect,
    SetCursor,
    SetSeries,
    SetLegend,
}

/// A hook invocation with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum HookEvent {
    /// The surface was (re)created.
    Init,
    /// The pointer entered the canvas.
    Enter,
    /// The pointer left the canvas.
    Leave,
    /// The plotting area moved or resized; viewport coordinates.
    SyncRect(Rectangle),
    /// The cursor moved.
    SetCursor,
    /// The engine resolved the series nearest to the cursor.
    SetSeries(Option<usize>),
    /// The engine resolved the nearest data point, globally and per series.
    SetLegend {
        idx: Option<usize>,
        idxs: Vec<Option<usize>>,
    },
}

impl HookEvent {
    pub fn kind(&self) -> HookKind {
        match self {
            Self::Init => HookKind::Init,
            Self::Enter => HookKind::Enter,
            Self::Leave => HookKind::Leave,
            Self::SyncRect(_) => HookKind::SyncRect,
            Self::SetCursor => HookKind::SetCursor,
            Self::SetSeries(_) => HookKind::SetSeries,
            Self::SetLegend { .. } => HookKind::SetLegend,
        }
    }
}

type Listener = Rc<dyn Fn(&HookEvent, &dyn ChartSurface)>;

#[derive(Default)]
struct HooksInner {
    next_id: u64,
    listeners: IndexMap<u64, (HookKind, Listener)>,
}

/// Registry of hook listeners. Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct Hooks {
    inner: Rc<RefCell<HooksInner>>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `kind`. It is removed when the returned
    /// subscription is dropped.
    #[must_use = "dropping the subscription removes the listener"]
    pub fn subscribe<F>(&self, kind: HookKind, listener: F) -> Subscription
    where
        F: Fn(&HookEvent, &dyn ChartSurface) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id = inner.next_id.wrapping_add(1);
        inner.listeners.insert(id, (kind, Rc::new(listener)));
        Subscription {
            id,
            hooks: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver `event` to every listener of its kind, in subscription order.
    ///
    /// Returns the number of listeners called.
    pub fn emit(&self, event: &HookEvent, surface: &dyn ChartSurface) -> usize {
        let kind = event.kind();
        // Snapshot so listeners may subscribe or unsubscribe while running.
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .values()
            .filter(|(k, _)| *k == kind)
            .map(|(_, l)| Rc::clone(l))
            .collect();

        for listener in &listeners {
            listener(event, surface);
        }
        listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn listener_count_for(&self, kind: HookKind) -> usize {
        self.inner
            .borrow()
            .listeners
            .values()
            .filter(|(k, _)| *k == kind)
            .count()
    }
}

/// Keeps a listener registered. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    hooks: Weak<RefCell<HooksInner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.hooks.upgrade() {
            inner.borrow_mut().listeners.shift_remove(&self.id);
        }
    }
}

#[cfg(test)]
#[path = "hooks_test.rs"]
mod tests;
