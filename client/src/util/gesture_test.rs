use super::*;

const THRESHOLD: f64 = 10.0;

// =============================================================
// Wheel
// =============================================================

#[test]
fn wheel_sign_picks_direction() {
    assert_eq!(wheel_direction(120.0), Some(Direction::Down));
    assert_eq!(wheel_direction(-3.5), Some(Direction::Up));
}

#[test]
fn zero_wheel_delta_is_ignored() {
    assert_eq!(wheel_direction(0.0), None);
}

// =============================================================
// Touch
// =============================================================

#[test]
fn small_moves_stay_below_threshold() {
    let mut touch = TouchTracker::default();
    touch.start(400.0);
    assert_eq!(touch.moved(395.0, THRESHOLD), None);
    assert_eq!(touch.moved(390.0, THRESHOLD), None);
    assert!(touch.is_active());
}

#[test]
fn swipe_up_moves_forward() {
    let mut touch = TouchTracker::default();
    touch.start(400.0);
    assert_eq!(touch.moved(385.0, THRESHOLD), Some(Direction::Down));
}

#[test]
fn swipe_down_moves_backward() {
    let mut touch = TouchTracker::default();
    touch.start(400.0);
    assert_eq!(touch.moved(420.0, THRESHOLD), Some(Direction::Up));
}

#[test]
fn stroke_fires_only_once() {
    let mut touch = TouchTracker::default();
    touch.start(400.0);
    let fired = [360.0, 300.0, 200.0]
        .into_iter()
        .filter_map(|y| touch.moved(y, THRESHOLD))
        .count();
    assert_eq!(fired, 1);
    assert!(!touch.is_active());
}

#[test]
fn new_stroke_rearms_tracker() {
    let mut touch = TouchTracker::default();
    touch.start(400.0);
    touch.moved(300.0, THRESHOLD);
    touch.end();
    touch.start(300.0);
    assert_eq!(touch.moved(340.0, THRESHOLD), Some(Direction::Up));
}

#[test]
fn moves_without_start_are_ignored() {
    let mut touch = TouchTracker::default();
    assert_eq!(touch.moved(0.0, THRESHOLD), None);
    touch.start(100.0);
    touch.end();
    assert_eq!(touch.moved(0.0, THRESHOLD), None);
}
