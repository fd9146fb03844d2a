use sketchkit_canvas::CanvasConfig;

#[test]
fn test_defaults_match_documented_values() {
    let config = CanvasConfig::default();
    assert_eq!(config.dimensions.min_zoom, 0.25);
    assert_eq!(config.dimensions.max_zoom, 4.0);
    assert_eq!(config.dimensions.default_zoom, 1.0);
    assert_eq!(config.rendering.culling_threshold, 100.0);
    assert_eq!(config.rendering.batch_size, 50);
    assert_eq!(config.rendering.render_interval_ms, 16);
}

#[test]
fn test_with_size_sets_both_surfaces() {
    let config = CanvasConfig::with_size(640.0, 480.0);
    assert_eq!(config.dimensions.width, 640.0);
    assert_eq!(config.dimensions.height, 480.0);
    assert_eq!(config.viewport.width, 640.0);
    assert_eq!(config.viewport.height, 480.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_json_roundtrip() {
    let mut config = CanvasConfig::with_size(800.0, 600.0);
    config.dimensions.max_zoom = 8.0;
    config.rendering.batch_size = 25;

    let json = serde_json::to_string(&config).unwrap();
    let back: CanvasConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(back.dimensions.max_zoom, 8.0);
    assert_eq!(back.rendering.batch_size, 25);
    assert_eq!(back.viewport.width, 800.0);
    assert!(back.validate().is_ok());
}

#[test]
fn test_partial_json_fills_defaults() {
    let json = r#"{ "dimensions": { "width": 1024.0, "height": 768.0,
                     "min_zoom": 0.5, "max_zoom": 2.0, "default_zoom": 1.0 } }"#;
    let config: CanvasConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.dimensions.min_zoom, 0.5);
    // Unspecified sections come from defaults.
    assert_eq!(config.rendering.render_interval_ms, 16);
    assert_eq!(config.viewport.offset_x, 0.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validated_passes_through_good_config() {
    let config = CanvasConfig::default().validated().unwrap();
    assert_eq!(config.dimensions.default_zoom, 1.0);
}

#[test]
fn test_validated_rejects_bad_config() {
    let mut config = CanvasConfig::default();
    config.dimensions.max_zoom = 0.1;
    assert!(config.validated().is_err());
}
