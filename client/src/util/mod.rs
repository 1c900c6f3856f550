//! Utility helpers shared across page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure motion description (`ease`, `clip`, `style`, `choreography`) and
//! input mapping (`gesture`) are kept apart from the browser-only drivers
//! (`motion`, `listeners`, `slide_frame`) so the former can be tested
//! natively.

pub mod choreography;
pub mod clip;
pub mod ease;
pub mod gesture;
#[cfg(feature = "hydrate")]
pub mod listeners;
#[cfg(feature = "hydrate")]
pub mod motion;
pub mod preload;
#[cfg(feature = "hydrate")]
pub mod slide_frame;
pub mod style;
