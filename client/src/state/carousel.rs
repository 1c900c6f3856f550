//! Hero carousel gesture gating and slide index.
//!
//! DESIGN
//! ======
//! One phase enum replaces the `isAnimating` / `scrollAllowed` /
//! `imagesLoaded` flag triple:
//!
//! ```text
//! Loading --images settled--> Idle --begin--> Transitioning
//!                              ^                   |
//!                              |                 finish
//!                              +--settle-- Cooldown <--+
//! ```
//!
//! Gestures are accepted only in `Idle` and only once the debounce window
//! since the last stamp has elapsed. Rejected gestures are dropped, never
//! queued. Timestamps are caller-supplied milliseconds so tests drive time
//! explicitly.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use crate::config::DEFAULT_GESTURE_DEBOUNCE_MS;
use crate::error::GestureRejected;
use crate::state::catalog::SlideNumber;

/// Travel direction of a slide change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Forward: next slide, content enters from below.
    Down,
    /// Backward: previous slide, content enters from above.
    Up,
}

impl Direction {
    /// +1 for `Down`, -1 for `Up`. Multiplies every offset in the slide
    /// choreography.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Down => 1.0,
            Self::Up => -1.0,
        }
    }

    #[must_use]
    pub fn step(self, from: SlideNumber) -> SlideNumber {
        match self {
            Self::Down => from.next(),
            Self::Up => from.prev(),
        }
    }
}

/// An accepted slide change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideTransition {
    pub direction: Direction,
    pub from: SlideNumber,
    pub to: SlideNumber,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselPhase {
    /// Slide images have not all settled yet; no listeners attached.
    Loading,
    Idle,
    Transitioning(SlideTransition),
    /// Transition finished; gestures stay blocked until `settle`.
    Cooldown,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselState {
    pub current: SlideNumber,
    pub phase: CarouselPhase,
    pub last_gesture_ms: Option<f64>,
    pub completed_transitions: u32,
    debounce_ms: f64,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(DEFAULT_GESTURE_DEBOUNCE_MS)
    }
}

impl CarouselState {
    #[must_use]
    pub fn new(debounce_ms: f64) -> Self {
        Self {
            current: SlideNumber::FIRST,
            phase: CarouselPhase::Loading,
            last_gesture_ms: None,
            completed_transitions: 0,
            debounce_ms: debounce_ms.max(0.0),
        }
    }

    /// All slide images have settled (loaded or failed).
    pub fn mark_images_loaded(&mut self) {
        if self.phase == CarouselPhase::Loading {
            self.phase = CarouselPhase::Idle;
        }
    }

    /// Accept or reject a gesture at `now_ms`.
    ///
    /// On success the published index moves immediately and the returned
    /// transition describes what the caller must animate.
    ///
    /// # Errors
    ///
    /// Returns the reason the gesture was dropped; state is left untouched.
    pub fn begin(&mut self, direction: Direction, now_ms: f64) -> Result<SlideTransition, GestureRejected> {
        match self.phase {
            CarouselPhase::Loading => return Err(GestureRejected::Loading),
            CarouselPhase::Transitioning(_) => return Err(GestureRejected::Busy),
            CarouselPhase::Cooldown => return Err(GestureRejected::Cooldown),
            CarouselPhase::Idle => {}
        }
        if let Some(last) = self.last_gesture_ms {
            let elapsed_ms = now_ms - last;
            if elapsed_ms < self.debounce_ms {
                return Err(GestureRejected::Debounced { elapsed_ms, window_ms: self.debounce_ms });
            }
        }

        let transition = SlideTransition { direction, from: self.current, to: direction.step(self.current) };
        self.current = transition.to;
        self.last_gesture_ms = Some(now_ms);
        self.phase = CarouselPhase::Transitioning(transition);
        Ok(transition)
    }

    /// The animation group completed. Returns the finished transition.
    pub fn finish(&mut self) -> Option<SlideTransition> {
        let CarouselPhase::Transitioning(transition) = self.phase else {
            return None;
        };
        self.phase = CarouselPhase::Cooldown;
        self.completed_transitions += 1;
        Some(transition)
    }

    /// Roll back a transition that could not be rendered.
    pub fn abort(&mut self) -> bool {
        let CarouselPhase::Transitioning(transition) = self.phase else {
            return false;
        };
        self.current = transition.from;
        self.phase = CarouselPhase::Idle;
        true
    }

    /// End the post-transition cooldown and restamp the debounce clock.
    pub fn settle(&mut self, now_ms: f64) -> bool {
        if self.phase != CarouselPhase::Cooldown {
            return false;
        }
        self.phase = CarouselPhase::Idle;
        self.last_gesture_ms = Some(now_ms);
        true
    }

    #[must_use]
    pub fn images_loaded(&self) -> bool {
        self.phase != CarouselPhase::Loading
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, CarouselPhase::Transitioning(_))
    }

    /// Whether a gesture could pass the phase gate (ignores the debounce).
    #[must_use]
    pub fn accepts_gestures(&self) -> bool {
        self.phase == CarouselPhase::Idle
    }
}
