//! Animatable visual state of one element.
//!
//! DESIGN
//! ======
//! A `Style` is a full snapshot of the properties the page animates:
//! translation, rotation, scale, opacity, and clip-path. Keyframes are always
//! emitted as complete transform strings (`translate rotate scale`) so the
//! browser interpolates matching functions component-wise. Optional
//! properties are emitted only when set, and a tween sets the same
//! properties on both of its keyframes.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::util::clip::{ClipPolygon, fmt_num};

/// Translation length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f64),
    /// Percentage of the element's own box.
    Percent(f64),
}

impl Length {
    pub const ZERO: Self = Self::Px(0.0);

    #[must_use]
    pub fn css(self) -> String {
        match self {
            Self::Px(v) => format!("{}px", fmt_num(v)),
            Self::Percent(v) => format!("{}%", fmt_num(v)),
        }
    }
}

/// CSS properties a tween can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Property {
    Transform,
    Opacity,
    ClipPath,
}

impl Property {
    /// Name used in inline `style` attributes.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Transform => "transform",
            Self::Opacity => "opacity",
            Self::ClipPath => "clip-path",
        }
    }

    /// Name used in Web Animations keyframe objects.
    #[must_use]
    pub fn keyframe_name(self) -> &'static str {
        match self {
            Self::Transform => "transform",
            Self::Opacity => "opacity",
            Self::ClipPath => "clipPath",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub x: Length,
    pub y: Length,
    pub rotate_deg: f64,
    pub scale: f64,
}

impl Transform {
    pub const IDENTITY: Self = Self { x: Length::ZERO, y: Length::ZERO, rotate_deg: 0.0, scale: 1.0 };

    #[must_use]
    pub fn css(self) -> String {
        format!(
            "translate({}, {}) rotate({}deg) scale({})",
            self.x.css(),
            self.y.css(),
            fmt_num(self.rotate_deg),
            fmt_num(self.scale)
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Style {
    pub transform: Option<Transform>,
    pub opacity: Option<f64>,
    pub clip: Option<ClipPolygon>,
}

impl Style {
    #[must_use]
    pub fn transform(transform: Transform) -> Self {
        Self { transform: Some(transform), ..Self::default() }
    }

    #[must_use]
    pub fn clip(clip: ClipPolygon) -> Self {
        Self { clip: Some(clip), ..Self::default() }
    }

    /// Vertical translation only.
    #[must_use]
    pub fn offset_y(y: Length) -> Self {
        Self::transform(Transform { y, ..Transform::IDENTITY })
    }

    #[must_use]
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity: Some(opacity), ..self }
    }

    /// `(property, css value)` pairs for every property this style sets.
    #[must_use]
    pub fn declarations(&self) -> Vec<(Property, String)> {
        let mut out = Vec::with_capacity(3);
        if let Some(transform) = self.transform {
            out.push((Property::Transform, transform.css()));
        }
        if let Some(opacity) = self.opacity {
            out.push((Property::Opacity, fmt_num(opacity)));
        }
        if let Some(clip) = self.clip {
            out.push((Property::ClipPath, clip.css()));
        }
        out
    }

    /// Inline `style` attribute text, used for server-rendered baselines.
    #[must_use]
    pub fn inline(&self) -> String {
        self.declarations()
            .into_iter()
            .map(|(prop, value)| format!("{}: {value};", prop.css_name()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether both styles drive the same set of properties.
    #[must_use]
    pub fn same_properties(&self, other: &Self) -> bool {
        self.transform.is_some() == other.transform.is_some()
            && self.opacity.is_some() == other.opacity.is_some()
            && self.clip.is_some() == other.clip.is_some()
    }
}
