use super::*;

/// Surface with a fixed cursor where every x index sits at `idx * 40` px and
/// the mid-point is fixed.
struct StubSurface {
    cursor: Cursor,
    mid: Option<f32>,
}

impl ChartSurface for StubSurface {
    fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn pos_to_idx(&self, left: f32) -> Option<usize> {
        Some((left / 40.0).round().max(0.0) as usize)
    }

    fn val_to_pos(&self, value: f64, scale: &str) -> Option<f32> {
        (scale == "x").then_some(value as f32 * 4.0)
    }

    fn x_value(&self, idx: usize) -> Option<f64> {
        Some(idx as f64 * 10.0)
    }

    fn x_scale(&self) -> &str {
        "x"
    }

    fn series_count(&self) -> usize {
        2
    }

    fn series_value(&self, _series: usize, _idx: usize) -> Option<f64> {
        None
    }

    fn series_scale(&self, _series: usize) -> &str {
        "y"
    }

    fn mid_point_y(&self, _idx: usize) -> Option<f32> {
        self.mid
    }
}

fn bounds() -> Rectangle {
    Rectangle::new(Point::new(800.0, 300.0), iced::Size::new(360.0, 240.0))
}

fn surface(left: f32, top: f32) -> StubSurface {
    StubSurface {
        cursor: Cursor::at(left, top),
        mid: Some(100.0),
    }
}

// =============================================================================
// is_cursor_outside_canvas
// =============================================================================

#[test]
fn unplaced_cursor_is_inside() {
    assert!(!is_cursor_outside_canvas(Cursor::default(), &bounds()));
    let half = Cursor {
        left: Some(-10.0),
        top: None,
    };
    assert!(!is_cursor_outside_canvas(half, &bounds()));
}

#[test]
fn canvas_edges_are_inside() {
    assert!(!is_cursor_outside_canvas(Cursor::at(0.0, 0.0), &bounds()));
    assert!(!is_cursor_outside_canvas(Cursor::at(360.0, 240.0), &bounds()));
    assert!(is_cursor_outside_canvas(Cursor::at(360.5, 10.0), &bounds()));
    assert!(is_cursor_outside_canvas(Cursor::at(10.0, -0.5), &bounds()));
}

// =============================================================================
// inside the canvas
// =============================================================================

#[test]
fn inside_anchor_is_bounds_origin_plus_cursor() {
    let anchor = position_tooltip(&surface(120.0, 45.0), &bounds());
    assert_eq!(anchor.point(), Some(Point::new(920.0, 345.0)));
}

#[test]
fn inside_anchor_holds_across_the_canvas() {
    for left in [0.0, 17.5, 180.0, 359.0, 360.0] {
        for top in [0.0, 1.0, 120.0, 240.0] {
            let anchor = position_tooltip(&surface(left, top), &bounds());
            assert_eq!(anchor.x, Some(800.0 + left));
            assert_eq!(anchor.y, Some(300.0 + top));
        }
    }
}

#[test]
fn unplaced_cursor_anchors_at_bounds_origin() {
    let stub = StubSurface {
        cursor: Cursor::default(),
        mid: None,
    };
    let anchor = position_tooltip(&stub, &bounds());
    assert_eq!(anchor.point(), Some(Point::new(800.0, 300.0)));
}

// =============================================================================
// vertical overflow
// =============================================================================

#[test]
fn above_canvas_snaps_to_data_x_and_mid_point() {
    // left 130 -> idx 3 -> x value 30 -> 120 px on the x scale
    let anchor = position_tooltip(&surface(130.0, -25.0), &bounds());
    assert_eq!(anchor.x, Some(920.0));
    assert_eq!(anchor.y, Some(400.0));
    assert_ne!(anchor.x, Some(800.0 + 130.0));
}

#[test]
fn below_canvas_uses_the_same_fallback() {
    let anchor = position_tooltip(&surface(40.0, 500.0), &bounds());
    assert_eq!(anchor.point(), Some(Point::new(840.0, 400.0)));
}

#[test]
fn vertical_overflow_without_mid_point_has_no_anchor() {
    let stub = StubSurface {
        cursor: Cursor::at(100.0, -5.0),
        mid: None,
    };
    let anchor = position_tooltip(&stub, &bounds());
    assert_eq!(anchor, TooltipAnchor::NONE);
    assert!(anchor.point().is_none());
}

#[test]
fn unresolvable_x_value_leaves_anchor_incomplete() {
    struct NoX(StubSurface);
    impl ChartSurface for NoX {
        fn cursor(&self) -> Cursor {
            self.0.cursor()
        }
        fn pos_to_idx(&self, left: f32) -> Option<usize> {
            self.0.pos_to_idx(left)
        }
        fn val_to_pos(&self, value: f64, scale: &str) -> Option<f32> {
            self.0.val_to_pos(value, scale)
        }
        fn x_value(&self, _idx: usize) -> Option<f64> {
            None
        }
        fn x_scale(&self) -> &str {
            "x"
        }
        fn series_count(&self) -> usize {
            2
        }
        fn series_value(&self, _series: usize, _idx: usize) -> Option<f64> {
            None
        }
        fn series_scale(&self, _series: usize) -> &str {
            "y"
        }
        fn mid_point_y(&self, idx: usize) -> Option<f32> {
            self.0.mid_point_y(idx)
        }
    }

    let anchor = position_tooltip(&NoX(surface(100.0, -20.0)), &bounds());
    assert_eq!(anchor.x, None);
    assert_eq!(anchor.y, Some(400.0));
    assert!(!anchor.is_complete());
}

// =============================================================================
// horizontal overflow
// =============================================================================

#[test]
fn horizontal_overflow_has_no_anchor() {
    for top in [0.0, 120.0, 240.0] {
        for left in [-0.1, -50.0, 360.1, 1_000.0] {
            let anchor = position_tooltip(&surface(left, top), &bounds());
            assert_eq!(anchor, TooltipAnchor::NONE);
        }
    }
}

#[test]
fn corner_overflow_has_no_anchor() {
    for (left, top) in [(-5.0, -5.0), (400.0, 300.0), (-1.0, 241.0)] {
        let anchor = position_tooltip(&surface(left, top), &bounds());
        assert_eq!(anchor, TooltipAnchor::NONE);
    }
}

// =============================================================================
// purity
// =============================================================================

#[test]
fn positioning_is_idempotent() {
    for (left, top) in [(120.0, 45.0), (130.0, -25.0), (-3.0, 10.0)] {
        let stub = surface(left, top);
        assert_eq!(
            position_tooltip(&stub, &bounds()),
            position_tooltip(&stub, &bounds())
        );
    }
}
