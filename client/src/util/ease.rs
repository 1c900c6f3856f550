//! Easing curves used by the page choreography.

#[cfg(test)]
#[path = "ease_test.rs"]
mod ease_test;

/// Named easing curves, rendered as CSS timing functions.
///
/// The `PowerN` curves are the cubic-bezier fits of the polynomial
/// ease-in/ease-out family (quad, cubic, quart).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    #[default]
    Linear,
    Power2Out,
    Power2InOut,
    Power3Out,
    Power4InOut,
}

impl Ease {
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Power2Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Self::Power2InOut => "cubic-bezier(0.455, 0.03, 0.515, 0.955)",
            Self::Power3Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Self::Power4InOut => "cubic-bezier(0.77, 0, 0.175, 1)",
        }
    }
}
