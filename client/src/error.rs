//! Error types for the page controllers.
//!
//! None of these reach the user. Missing anchors disable a controller,
//! image failures are logged, and rejected gestures are dropped.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A required mount point was not present when a controller set up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("missing DOM anchor: {0}")]
    MissingAnchor(&'static str),
}

/// A catalog or preview image could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageLoadError {
    #[error("image failed to load: {src}")]
    Failed { src: String },
    #[error("image element unavailable for {src}")]
    Unavailable { src: String },
}

impl ImageLoadError {
    /// Path of the image that failed.
    #[must_use]
    pub fn src(&self) -> &str {
        match self {
            Self::Failed { src } | Self::Unavailable { src } => src,
        }
    }
}

/// Why the carousel refused a gesture.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GestureRejected {
    #[error("carousel images are still loading")]
    Loading,
    #[error("a slide transition is already running")]
    Busy,
    #[error("carousel is settling after a transition")]
    Cooldown,
    #[error("gesture arrived {elapsed_ms}ms after the previous one (min {window_ms}ms)")]
    Debounced { elapsed_ms: f64, window_ms: f64 },
}
