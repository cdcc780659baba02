use super::*;

// =============================================================================
// val_to_pos
// =============================================================================

#[test]
fn horizontal_linear_maps_range_onto_width() {
    let scale = Scale::horizontal(0.0, 100.0);
    assert_eq!(scale.val_to_pos(0.0, 360.0), Some(0.0));
    assert_eq!(scale.val_to_pos(50.0, 360.0), Some(180.0));
    assert_eq!(scale.val_to_pos(100.0, 360.0), Some(360.0));
}

#[test]
fn vertical_linear_is_flipped() {
    let scale = Scale::vertical(0.0, 10.0);
    assert_eq!(scale.val_to_pos(10.0, 240.0), Some(0.0));
    assert_eq!(scale.val_to_pos(0.0, 240.0), Some(240.0));
}

#[test]
fn out_of_range_values_map_outside_canvas() {
    let scale = Scale::horizontal(0.0, 10.0);
    assert_eq!(scale.val_to_pos(20.0, 100.0), Some(200.0));
    assert_eq!(scale.val_to_pos(-10.0, 100.0), Some(-100.0));
}

#[test]
fn degenerate_range_has_no_position() {
    let scale = Scale::horizontal(5.0, 5.0);
    assert_eq!(scale.val_to_pos(5.0, 100.0), None);
}

#[test]
fn log_scale_rejects_non_positive_values() {
    let scale = Scale::vertical(1.0, 1000.0).with_distribution(Distribution::Log { base: 10.0 });
    assert_eq!(scale.val_to_pos(0.0, 300.0), None);
    assert_eq!(scale.val_to_pos(-4.0, 300.0), None);
    let mid = scale.val_to_pos(31.622_776, 300.0).unwrap();
    assert!((mid - 150.0).abs() < 1e-3);
}

// =============================================================================
// pos_to_val
// =============================================================================

#[test]
fn pos_to_val_inverts_val_to_pos() {
    let scale = Scale::horizontal(1_000.0, 2_000.0);
    let pos = scale.val_to_pos(1_250.0, 400.0).unwrap();
    let back = scale.pos_to_val(pos, 400.0).unwrap();
    assert!((back - 1_250.0).abs() < 1e-6);
}

#[test]
fn pos_to_val_needs_a_positive_dimension() {
    let scale = Scale::horizontal(0.0, 1.0);
    assert_eq!(scale.pos_to_val(10.0, 0.0), None);
}
