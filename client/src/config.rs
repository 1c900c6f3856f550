//! Motion timing and gesture thresholds.
//!
//! DESIGN
//! ======
//! A single `MotionConfig` is provided through Leptos context by `App` so
//! both controllers read the same numbers. The settle delay after a slide
//! transition is an empirical debounce and stays tunable here rather than
//! being baked into the carousel state machine.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Minimum time between two accepted carousel gestures.
pub const DEFAULT_GESTURE_DEBOUNCE_MS: f64 = 1000.0;
/// Delay between a slide transition finishing and gestures being re-enabled.
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 100;
/// Vertical travel a touch stroke needs before it counts as a gesture.
pub const DEFAULT_TOUCH_THRESHOLD_PX: f64 = 10.0;
/// Preview images retained in the menu's hover stack.
pub const DEFAULT_PREVIEW_CAPACITY: usize = 3;
/// Length of the synchronized slide transition.
pub const DEFAULT_SLIDE_DURATION_MS: f64 = 1250.0;
/// Length of the overlay open/close sequence.
pub const DEFAULT_MENU_DURATION_MS: f64 = 1250.0;

/// Timing knobs shared by the menu and carousel controllers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub gesture_debounce_ms: f64,
    pub settle_delay_ms: u32,
    pub touch_threshold_px: f64,
    pub preview_capacity: usize,
    pub slide_duration_ms: f64,
    pub menu_duration_ms: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            gesture_debounce_ms: DEFAULT_GESTURE_DEBOUNCE_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            touch_threshold_px: DEFAULT_TOUCH_THRESHOLD_PX,
            preview_capacity: DEFAULT_PREVIEW_CAPACITY,
            slide_duration_ms: DEFAULT_SLIDE_DURATION_MS,
            menu_duration_ms: DEFAULT_MENU_DURATION_MS,
        }
    }
}
