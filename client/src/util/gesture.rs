//! Wheel and touch input mapping for the carousel.
//!
//! Both adapters reduce raw browser input to an optional `Direction`; the
//! carousel state machine decides whether that direction is accepted.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::state::carousel::Direction;

/// Map a wheel event's vertical delta to a direction.
///
/// Positive delta (scrolling down) moves forward. A zero delta, as sent by
/// purely horizontal wheels and trackpads, maps to nothing.
#[must_use]
pub fn wheel_direction(delta_y: f64) -> Option<Direction> {
    if delta_y > 0.0 {
        Some(Direction::Down)
    } else if delta_y < 0.0 {
        Some(Direction::Up)
    } else {
        None
    }
}

/// Tracks one touch stroke and fires at most one direction per stroke.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchTracker {
    start_y: f64,
    active: bool,
}

impl TouchTracker {
    pub fn start(&mut self, client_y: f64) {
        self.start_y = client_y;
        self.active = true;
    }

    /// Feed a move sample. Once the stroke travels more than `threshold_px`
    /// vertically it yields a direction and stops tracking until the next
    /// `start`. Finger moving up (content pulled up) moves forward.
    pub fn moved(&mut self, client_y: f64, threshold_px: f64) -> Option<Direction> {
        if !self.active {
            return None;
        }
        let travelled = self.start_y - client_y;
        if travelled.abs() <= threshold_px {
            return None;
        }
        self.active = false;
        Some(if travelled > 0.0 { Direction::Down } else { Direction::Up })
    }

    pub fn end(&mut self) {
        self.active = false;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}
