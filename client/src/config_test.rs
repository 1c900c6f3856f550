use super::*;

#[test]
fn default_debounce_is_one_second() {
    assert_eq!(MotionConfig::default().gesture_debounce_ms, 1000.0);
}

#[test]
fn default_settle_delay_is_short() {
    assert_eq!(MotionConfig::default().settle_delay_ms, 100);
}

#[test]
fn default_thresholds_match_constants() {
    let cfg = MotionConfig::default();
    assert_eq!(cfg.touch_threshold_px, DEFAULT_TOUCH_THRESHOLD_PX);
    assert_eq!(cfg.preview_capacity, 3);
    assert_eq!(cfg.slide_duration_ms, 1250.0);
    assert_eq!(cfg.menu_duration_ms, 1250.0);
}
