use iced::{Rectangle, Size};

use super::*;
use crate::{
    TooltipPluginBuilder,
    frame::Field,
    hooks::HookEvent,
    surface::{Cursor, PlotSurface},
    tracker::CursorSync,
};

fn frame() -> AlignedFrame {
    AlignedFrame::new(vec![
        Field::time("time", [0, 10, 20, 30]),
        Field::number("a", [Some(1.0), Some(2.0), Some(3.0), Some(4.0)]),
    ])
    .unwrap()
}

fn bounds() -> Rectangle {
    Rectangle::new(Point::new(800.0, 300.0), Size::new(360.0, 240.0))
}

fn focus_at(hooks: &Hooks, surface: &PlotSurface<'_>, point: usize) {
    hooks.emit(&HookEvent::SyncRect(bounds()), surface);
    hooks.emit(&HookEvent::Enter, surface);
    hooks.emit(&HookEvent::SetSeries(Some(1)), surface);
    hooks.emit(
        &HookEvent::SetLegend {
            idx: Some(point),
            idxs: vec![Some(point), Some(point)],
        },
        surface,
    );
    hooks.emit(&HookEvent::SetCursor, surface);
}

// =============================================================================
// view gate
// =============================================================================

#[test]
fn view_offsets_the_anchor() {
    let frame = frame();
    let surface = PlotSurface::new(&frame, Size::new(360.0, 240.0)).with_cursor(Cursor::at(120.0, 45.0));
    let hooks = Hooks::new();
    let plugin = TooltipPlugin::default();
    let _attachment = plugin.attach(&hooks);

    focus_at(&hooks, &surface, 1);
    let view = plugin.view(&frame).unwrap();
    assert_eq!(view.anchor, Point::new(920.0, 345.0));
    assert_eq!(view.offset, Vector::new(10.0, 10.0));
    assert_eq!(view.position(), Point::new(930.0, 355.0));
    assert!(matches!(view.content, TooltipContent::Table { .. }));
}

#[test]
fn no_view_before_a_point_is_resolved() {
    let frame = frame();
    let surface = PlotSurface::new(&frame, Size::new(360.0, 240.0)).with_cursor(Cursor::at(10.0, 10.0));
    let hooks = Hooks::new();
    let plugin = TooltipPlugin::default();
    let _attachment = plugin.attach(&hooks);

    hooks.emit(&HookEvent::SyncRect(bounds()), &surface);
    hooks.emit(&HookEvent::Enter, &surface);
    hooks.emit(&HookEvent::SetCursor, &surface);
    assert_eq!(plugin.view(&frame), None);
}

#[test]
fn no_view_without_an_anchor() {
    let frame = frame();
    let surface = PlotSurface::new(&frame, Size::new(360.0, 240.0)).with_cursor(Cursor::at(-40.0, 10.0));
    let hooks = Hooks::new();
    let plugin = TooltipPlugin::default();
    let _attachment = plugin.attach(&hooks);

    focus_at(&hooks, &surface, 0);
    assert!(plugin.content(&frame).is_some());
    assert_eq!(plugin.view(&frame), None);
}

#[test]
fn hidden_mode_never_renders() {
    let frame = frame();
    let surface = PlotSurface::new(&frame, Size::new(360.0, 240.0)).with_cursor(Cursor::at(100.0, 100.0));
    let hooks = Hooks::new();
    let mut plugin = TooltipPlugin::default();
    plugin.set_mode(TooltipMode::None).unwrap();
    let _attachment = plugin.attach(&hooks);

    focus_at(&hooks, &surface, 2);
    assert_eq!(plugin.view(&frame), None);
}

#[test]
fn crosshair_leave_hides_the_tooltip() {
    let frame = frame();
    let surface = PlotSurface::new(&frame, Size::new(360.0, 240.0)).with_cursor(Cursor::at(100.0, 100.0));
    let hooks = Hooks::new();
    let plugin = TooltipPluginBuilder::new()
        .with_sync(CursorSync::Crosshair)
        .build()
        .unwrap();
    let _attachment = plugin.attach(&hooks);

    focus_at(&hooks, &surface, 2);
    assert!(plugin.view(&frame).is_some());

    hooks.emit(&HookEvent::Leave, &surface);
    // Even a fresh cursor update cannot bring back a tooltip on a left panel.
    hooks.emit(&HookEvent::SetCursor, &surface);
    assert_eq!(plugin.state().focused_point, Some(2));
    assert_eq!(plugin.view(&frame), None);
}

// =============================================================================
// mode changes
// =============================================================================

#[test]
fn set_mode_switches_content() {
    let mut plugin = TooltipPlugin::default();
    plugin.set_mode(TooltipMode::Multi).unwrap();
    assert_eq!(plugin.mode(), TooltipMode::Multi);
    assert_eq!(plugin.options().mode, TooltipMode::Multi);
}

#[test]
fn single_only_rejects_multi_series_modes() {
    let mut plugin = TooltipPluginBuilder::new().single_only(true).build().unwrap();
    assert_eq!(
        plugin.set_mode(TooltipMode::Multi),
        Err(OptionsError::UnsupportedMode(TooltipMode::Multi))
    );
    assert_eq!(plugin.mode(), TooltipMode::Single);
    assert!(plugin.set_mode(TooltipMode::None).is_ok());
}
