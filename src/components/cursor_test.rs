#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn follower_starts_at_origin() {
    let follower = PointerFollower::new(0.15);
    assert_eq!(follower.current(), Point::default());
}

#[test]
fn step_closes_fixed_fraction_of_remaining_distance() {
    let mut follower = PointerFollower::new(0.15);
    follower.set_target(Point::new(100.0, -200.0));

    let first = follower.step();
    assert!((first.x - 15.0).abs() < 1e-9);
    assert!((first.y + 30.0).abs() < 1e-9);

    let second = follower.step();
    assert!((second.x - (15.0 + 85.0 * 0.15)).abs() < 1e-9);
}

#[test]
fn follower_converges_on_stationary_target() {
    let mut follower = PointerFollower::new(0.15);
    follower.set_target(Point::new(640.0, 360.0));
    for _ in 0..200 {
        follower.step();
    }
    let at = follower.current();
    assert!((at.x - 640.0).abs() < 0.01);
    assert!((at.y - 360.0).abs() < 0.01);
}

#[test]
fn retargeting_mid_flight_changes_direction() {
    let mut follower = PointerFollower::new(0.5);
    follower.set_target(Point::new(100.0, 0.0));
    follower.step();
    follower.set_target(Point::new(0.0, 0.0));
    let back = follower.step();
    assert_eq!(back.x, 25.0);
}

#[test]
fn translate_css_formats_pixels() {
    assert_eq!(translate_css(Point::new(12.5, 0.0)), "translate(12.5px, 0px)");
}

#[test]
fn hover_kinds_drive_independent_classes() {
    assert_eq!(HoverKind::Interactive.class(), "hover");
    assert_eq!(HoverKind::Text.class(), "text-hover");
    assert_ne!(HoverKind::Interactive.selector(), HoverKind::Text.selector());
}
