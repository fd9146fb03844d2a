use sketchkit_canvas::{CanvasConfig, Viewport, WheelInput, ZoomPanController};
use sketchkit_core::{Bounds, Point};

fn controller() -> ZoomPanController {
    // Defaults: zoom bounds [0.25, 4.0], 1920x1080 view.
    ZoomPanController::new(&CanvasConfig::default())
}

#[test]
fn test_scroll_up_zooms_in_anchored_at_pointer() {
    let ctrl = controller();
    let current = Viewport::new(1.0, Point::ZERO);

    // delta -100 => zoom * (1 - (-100/1000)) = 1.1
    let next = ctrl.next_viewport(current, &WheelInput::new(-100.0, 100.0, 100.0));
    assert!((next.zoom - 1.1).abs() < 1e-12);

    // anchor = pointer - pan = (100,100); pan = pointer - anchor * 1.1
    assert!((next.pan.x - -10.0).abs() < 1e-9);
    assert!((next.pan.y - -10.0).abs() < 1e-9);
}

#[test]
fn test_scroll_down_zooms_out() {
    let ctrl = controller();
    let current = Viewport::new(1.0, Point::ZERO);

    let next = ctrl.next_viewport(current, &WheelInput::new(100.0, 0.0, 0.0));
    assert!((next.zoom - 0.9).abs() < 1e-12);
}

#[test]
fn test_zoom_clamped_to_max() {
    let ctrl = controller();
    let current = Viewport::new(3.9, Point::ZERO);

    // Raw zoom would be 3.9 * 1.5 = 5.85, clamped at 4.0.
    let next = ctrl.next_viewport(current, &WheelInput::new(-500.0, 50.0, 50.0));
    assert_eq!(next.zoom, 4.0);
}

#[test]
fn test_zoom_clamped_to_min() {
    let ctrl = controller();
    let current = Viewport::new(0.3, Point::ZERO);

    let next = ctrl.next_viewport(current, &WheelInput::new(900.0, 50.0, 50.0));
    assert_eq!(next.zoom, 0.25);
}

#[test]
fn test_pointer_stays_fixed_across_zoom() {
    let ctrl = controller();
    let pointer = Point::new(320.0, 240.0);
    let current = Viewport::new(1.0, Point::new(15.0, -30.0));

    let next = ctrl.next_viewport(current, &WheelInput::new(-200.0, pointer.x, pointer.y));

    // The anchor (pointer - pan) scaled into the new viewport must land
    // back under the pointer.
    let anchor = pointer - current.pan;
    let rescaled = next.pan + anchor * (next.zoom / current.zoom);
    assert!((rescaled.x - pointer.x).abs() < 1e-9);
    assert!((rescaled.y - pointer.y).abs() < 1e-9);
}

#[test]
fn test_faster_scroll_changes_zoom_more() {
    let ctrl = controller();
    let current = Viewport::new(1.0, Point::ZERO);

    let slow = ctrl.next_viewport(current, &WheelInput::new(-50.0, 0.0, 0.0));
    let fast = ctrl.next_viewport(current, &WheelInput::new(-250.0, 0.0, 0.0));
    assert!((fast.zoom - current.zoom).abs() > (slow.zoom - current.zoom).abs());
}

#[test]
fn test_nan_delta_is_a_no_op() {
    let ctrl = controller();
    let current = Viewport::new(1.5, Point::new(12.0, 34.0));

    let next = ctrl.next_viewport(current, &WheelInput::new(f64::NAN, 100.0, 100.0));
    assert_eq!(next, current);
}

#[test]
fn test_non_finite_pointer_is_a_no_op() {
    let ctrl = controller();
    let current = Viewport::new(1.5, Point::new(12.0, 34.0));

    let next = ctrl.next_viewport(current, &WheelInput::new(-100.0, f64::INFINITY, 100.0));
    assert_eq!(next, current);

    let next = ctrl.next_viewport(current, &WheelInput::new(-100.0, 100.0, f64::NAN));
    assert_eq!(next, current);
}

#[test]
fn test_zero_current_zoom_leaves_pan_unchanged() {
    let ctrl = controller();
    // Clamping keeps zoom positive in normal operation; a zero slipping in
    // must not divide. Pan ratio is treated as 1.
    let current = Viewport::new(0.0, Point::new(5.0, 5.0));

    let next = ctrl.next_viewport(current, &WheelInput::new(-100.0, 100.0, 100.0));
    assert_eq!(next.zoom, ctrl.min_zoom());
    assert_eq!(next.pan, current.pan);
}

#[test]
fn test_zoom_in_steps_and_clamps() {
    let ctrl = controller();
    let mut vp = Viewport::default();
    for _ in 0..20 {
        vp = ctrl.zoom_in(vp);
        assert!(vp.zoom <= ctrl.max_zoom());
    }
    assert_eq!(vp.zoom, ctrl.max_zoom());
}

#[test]
fn test_zoom_out_reverses_zoom_in() {
    let ctrl = controller();
    let vp = Viewport::default();
    let stepped = ctrl.zoom_out(ctrl.zoom_in(vp));
    assert!((stepped.zoom - vp.zoom).abs() < 1e-9);
}

#[test]
fn test_zoom_step_keeps_view_center_fixed() {
    let config = CanvasConfig::with_size(800.0, 600.0);
    let ctrl = ZoomPanController::new(&config);
    let center = Point::new(400.0, 300.0);
    let current = Viewport::new(1.0, Point::new(-50.0, 25.0));

    let next = ctrl.zoom_in(current);
    let anchor = center - current.pan;
    let rescaled = next.pan + anchor * (next.zoom / current.zoom);
    assert!((rescaled.x - center.x).abs() < 1e-9);
    assert!((rescaled.y - center.y).abs() < 1e-9);
}

#[test]
fn test_fit_to_bounds_centers_content() {
    let config = CanvasConfig::with_size(800.0, 600.0);
    let ctrl = ZoomPanController::new(&config);

    let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
    let vp = ctrl.fit_to_bounds(&bounds).expect("valid bounds");

    // Small content zooms in (up to the configured max).
    assert!(vp.zoom > 1.0);

    // The bounds center must map to the view center.
    let screen = vp.world_to_screen(bounds.center());
    assert!((screen.x - 400.0).abs() < 1e-9);
    assert!((screen.y - 300.0).abs() < 1e-9);
}

#[test]
fn test_fit_to_bounds_rejects_degenerate_box() {
    let ctrl = controller();
    assert!(ctrl.fit_to_bounds(&Bounds::new(10.0, 10.0, 10.0, 10.0)).is_none());
    assert!(ctrl.fit_to_bounds(&Bounds::new(5.0, 5.0, 1.0, 1.0)).is_none());
    assert!(ctrl.fit_to_bounds(&Bounds::default()).is_none());
}

#[test]
fn test_clamp_zoom_bounds() {
    let ctrl = controller();
    assert_eq!(ctrl.clamp_zoom(0.01), 0.25);
    assert_eq!(ctrl.clamp_zoom(100.0), 4.0);
    assert_eq!(ctrl.clamp_zoom(1.3), 1.3);
}
