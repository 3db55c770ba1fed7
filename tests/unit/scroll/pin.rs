use super::*;

fn region(start: f64, height: f64) -> PinRegion {
    PinRegion::new(
        start,
        Viewport::new(1920.0, height).unwrap(),
        &SpotlightConfig::default(),
    )
}

#[test]
fn length_follows_viewport_height() {
    let r = region(0.0, 1000.0);
    assert_eq!(r.length_px, 1510.0);
    assert_eq!(r.end_px(), 1510.0);
}

#[test]
fn progress_is_clamped_to_unit_range() {
    let r = region(500.0, 1000.0);
    assert_eq!(r.progress_at(0.0), 0.0);
    assert_eq!(r.progress_at(500.0), 0.0);
    assert_eq!(r.progress_at(500.0 + 755.0), 0.5);
    assert_eq!(r.progress_at(r.end_px()), 1.0);
    assert_eq!(r.progress_at(1e9), 1.0);
}

#[test]
fn zero_height_region_is_a_step() {
    let r = region(100.0, 0.0);
    assert_eq!(r.progress_at(99.0), 0.0);
    assert_eq!(r.progress_at(100.0), 1.0);
}

#[test]
fn nan_offset_maps_to_start() {
    let r = region(0.0, 1000.0);
    assert_eq!(r.progress_at(f64::NAN), 0.0);
    assert_eq!(r.progress_at(f64::INFINITY), 1.0);
    assert_eq!(r.progress_at(f64::NEG_INFINITY), 0.0);
}
