//! Four-point clip-path polygons for wipe reveals.
//!
//! Every polygon here has the same vertex count so the browser can
//! interpolate between any two of them. Coordinates are percentages of the
//! element box, listed in the order the CSS `polygon()` expects.

#[cfg(test)]
#[path = "clip_test.rs"]
mod clip_test;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipPolygon(pub [(f64, f64); 4]);

impl ClipPolygon {
    /// Whole box visible.
    pub const FULL: Self = Self([(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)]);
    /// Collapsed onto the top edge.
    pub const TOP_EDGE: Self = Self([(0.0, 0.0), (100.0, 0.0), (100.0, 0.0), (0.0, 0.0)]);
    /// Collapsed onto the bottom edge.
    pub const BOTTOM_EDGE: Self = Self([(0.0, 100.0), (100.0, 100.0), (100.0, 100.0), (0.0, 100.0)]);
    /// Whole box visible, wound from the bottom edge upward.
    pub const FULL_FROM_BOTTOM: Self = Self([(0.0, 100.0), (100.0, 100.0), (100.0, 0.0), (0.0, 0.0)]);

    /// Zero visible area.
    #[must_use]
    pub fn is_collapsed(self) -> bool {
        let [a, b, c, d] = self.0;
        let doubled = (a.0 * b.1 - b.0 * a.1) + (b.0 * c.1 - c.0 * b.1) + (c.0 * d.1 - d.0 * c.1) + (d.0 * a.1 - a.0 * d.1);
        doubled.abs() < f64::EPSILON
    }

    #[must_use]
    pub fn css(self) -> String {
        let points = self
            .0
            .iter()
            .map(|(x, y)| format!("{}% {}%", fmt_num(*x), fmt_num(*y)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("polygon({points})")
    }
}

/// Format without a trailing `.0` so output matches hand-written CSS.
pub(crate) fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let whole = value as i64;
        whole.to_string()
    } else {
        value.to_string()
    }
}
