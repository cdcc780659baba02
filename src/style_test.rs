use super::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

// =============================================================================
// defaults
// =============================================================================

#[test]
fn default_style_matches_marker_defaults() {
    let style = StyleConfig::default();
    assert_eq!(style.size.fixed, 5.0);
    assert_eq!((style.size.min, style.size.max), (2.0, 15.0));
    assert_eq!(style.symbol.mode, ResourceDimensionMode::Fixed);
    assert_eq!(style.symbol.fixed, "img/icons/marker/circle.svg");
    assert_eq!(style.text.mode, TextDimensionMode::Field);
    assert_eq!(style.color.fixed, "dark-green");
    assert!(approx(style.opacity, 0.4));
}

#[test]
fn partial_json_fills_defaults() {
    let style: StyleConfig = serde_json::from_str(r#"{"opacity":0.8}"#).unwrap();
    assert!(approx(style.opacity, 0.8));
    assert_eq!(style.size, ScaleDimensionConfig::default());
    assert_eq!(style.color, ColorDimensionConfig::default());
}

// =============================================================================
// editors
// =============================================================================

#[test]
fn editors_leave_other_dimensions_alone() {
    let color = ColorDimensionConfig {
        fixed: "red".into(),
        field: None,
    };
    let style = StyleConfig::default()
        .with_color(Some(color.clone()))
        .with_opacity(Some(0.7))
        .unwrap();
    assert_eq!(style.color, color);
    assert!(approx(style.opacity, 0.7));
    assert_eq!(style.symbol, ResourceDimensionConfig::default());
}

#[test]
fn clearing_a_dimension_restores_its_default() {
    let style = StyleConfig::default()
        .with_text(Some(TextDimensionConfig {
            mode: TextDimensionMode::Fixed,
            fixed: "station".into(),
            field: String::new(),
        }))
        .with_text(None)
        .with_opacity(Some(1.0))
        .unwrap()
        .with_opacity(None)
        .unwrap();
    assert_eq!(style, StyleConfig::default());
}

#[test]
fn size_outside_limits_is_rejected() {
    let too_big = ScaleDimensionConfig {
        fixed: 150.0,
        ..ScaleDimensionConfig::default()
    };
    let err = StyleConfig::default().with_size(Some(too_big)).unwrap_err();
    assert!(matches!(err, OptionsError::OutOfRange { name: "size", .. }));

    let inverted = ScaleDimensionConfig {
        min: 20.0,
        max: 10.0,
        ..ScaleDimensionConfig::default()
    };
    assert!(StyleConfig::default().with_size(Some(inverted)).is_err());
}

#[test]
fn size_within_limits_is_kept() {
    let size = ScaleDimensionConfig {
        fixed: 1.0,
        min: 1.0,
        max: 100.0,
        field: Some("magnitude".into()),
    };
    let style = StyleConfig::default().with_size(Some(size.clone())).unwrap();
    assert_eq!(style.size, size);
}

#[test]
fn opacity_snaps_to_slider_step() {
    let style = StyleConfig::default().with_opacity(Some(0.44)).unwrap();
    assert!(approx(style.opacity, 0.4));
    let style = style.with_opacity(Some(0.96)).unwrap();
    assert!(approx(style.opacity, 1.0));
}

#[test]
fn opacity_outside_unit_range_is_rejected() {
    for value in [-0.1, 1.5, f32::NAN] {
        assert!(StyleConfig::default().with_opacity(Some(value)).is_err());
    }
}
