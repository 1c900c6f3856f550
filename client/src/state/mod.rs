//! Page state machines.
//!
//! DESIGN
//! ======
//! Each controller owns a small focused model (`menu`, `preview`,
//! `carousel`) that knows nothing about the DOM, so gesture gating and
//! index arithmetic stay testable outside the browser.

pub mod carousel;
pub mod catalog;
pub mod menu;
pub mod preview;
