use super::*;
use crate::foundation::core::TransformState;
use crate::session::target::RecordingTarget;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Node {
    Img(u8),
    Cover,
}

fn viewport(w: f64, h: f64) -> Viewport {
    Viewport::new(w, h).unwrap()
}

fn configured(w: f64, h: f64) -> (Spotlight<Node>, RecordingTarget<Node>) {
    let mut spot = Spotlight::new(SpotlightConfig::default()).unwrap();
    let mut target = RecordingTarget::new();
    spot.configure(
        viewport(w, h),
        (0..4).map(Node::Img).collect(),
        Some(Node::Cover),
        &mut target,
    );
    (spot, target)
}

#[test]
fn configure_applies_base_states() {
    let (spot, target) = configured(1920.0, 1080.0);
    assert!(spot.is_configured());
    assert_eq!(target.applied(), 5);
    for i in 0..4 {
        assert_eq!(target.state(&Node::Img(i)), Some(TransformState::COLLAPSED));
    }
    assert_eq!(target.state(&Node::Cover), Some(TransformState::COLLAPSED));
}

#[test]
fn new_rejects_invalid_config() {
    let cfg = SpotlightConfig {
        acceleration: -1.0,
        ..SpotlightConfig::default()
    };
    assert!(Spotlight::<Node>::new(cfg).is_err());
}

#[test]
fn progress_is_applied_to_every_handle() {
    let (mut spot, mut target) = configured(1920.0, 1080.0);
    let frame = spot.on_progress(0.95, &mut target).unwrap();
    for e in &frame.elements {
        assert_eq!(target.state(&Node::Img(e.index as u8)), Some(e.transform));
    }
    assert_eq!(target.state(&Node::Cover), Some(frame.cover));
    assert_eq!(spot.last_progress(), Some(0.95));
}

#[test]
fn resize_switches_multiplier_and_keeps_progress() {
    let (mut spot, mut target) = configured(1200.0, 800.0);
    spot.on_progress(0.25, &mut target).unwrap();
    let desktop_scale = target.state(&Node::Img(0)).unwrap().scale;
    assert!((desktop_scale - 2.0).abs() < 1e-9);

    let frame = spot.on_resize(viewport(400.0, 800.0), &mut target).unwrap();
    assert_eq!(frame.progress, 0.25);
    assert!(spot.scheduler().unwrap().table().is_mobile);
    let mobile_scale = target.state(&Node::Img(0)).unwrap().scale;
    assert!((mobile_scale - 4.0).abs() < 1e-9);
}

#[test]
fn scroll_is_pinned_and_scrubbed() {
    let (mut spot, mut target) = configured(1920.0, 1000.0);
    let pin = spot.pin_region().unwrap();
    assert_eq!(pin.length_px, 1510.0);

    let first = spot.on_scroll(pin.end_px(), 0.0, &mut target).unwrap();
    assert_eq!(first.progress, 0.0);
    assert!(!spot.is_settled(0.5));

    let mid = spot.tick(0.5, &mut target).unwrap();
    assert!(mid.progress > 0.0 && mid.progress < 1.0);

    let done = spot.tick(1.0, &mut target).unwrap();
    assert_eq!(done.progress, 1.0);
    assert!(spot.is_settled(1.0));
}

#[test]
fn teardown_makes_updates_no_ops() {
    let (mut spot, mut target) = configured(1920.0, 1080.0);
    spot.teardown();
    let applied = target.applied();
    assert!(!spot.is_configured());
    assert!(spot.on_progress(0.5, &mut target).is_none());
    assert!(spot.on_scroll(100.0, 0.0, &mut target).is_none());
    assert!(spot.on_resize(viewport(400.0, 400.0), &mut target).is_none());
    assert_eq!(target.applied(), applied);
    assert!(spot.is_settled(0.0));
}

#[test]
fn empty_selection_without_cover_applies_nothing() {
    let mut spot = Spotlight::<Node>::new(SpotlightConfig::default()).unwrap();
    let mut target = RecordingTarget::new();
    spot.configure(viewport(800.0, 600.0), Vec::new(), None, &mut target);
    let frame = spot.on_progress(1.0, &mut target).unwrap();
    assert!(frame.elements.is_empty());
    assert_eq!(target.applied(), 0);
}

#[test]
fn pin_start_offsets_the_region() {
    let mut spot = Spotlight::new(SpotlightConfig::default())
        .unwrap()
        .with_pin_start(300.0);
    let mut target = RecordingTarget::new();
    spot.configure(viewport(1920.0, 1000.0), vec![Node::Img(0)], None, &mut target);
    let pin = spot.pin_region().unwrap();
    assert_eq!(pin.start_px, 300.0);
    assert_eq!(pin.progress_at(300.0), 0.0);
}

#[test]
fn nan_scroll_does_not_stall_later_scrolling() {
    let (mut spot, mut target) = configured(1920.0, 1000.0);
    let first = spot.on_scroll(f64::NAN, 0.0, &mut target).unwrap();
    assert_eq!(first.progress, 0.0);

    let end = spot.pin_region().unwrap().end_px();
    spot.on_scroll(end, 2.0, &mut target).unwrap();
    let done = spot.tick(10.0, &mut target).unwrap();
    assert_eq!(done.progress, 1.0);
    assert!(spot.is_settled(10.0));
    assert_ne!(target.state(&Node::Img(0)), Some(TransformState::COLLAPSED));

    spot.on_resize(viewport(1920.0, 1000.0), &mut target).unwrap();
    assert_eq!(spot.last_progress(), Some(1.0));
}
