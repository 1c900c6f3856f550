//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components own their local state signals and read motion timings from the
//! `MotionConfig` context provided by `App`.

pub mod carousel;
pub mod features;
pub mod menu;
