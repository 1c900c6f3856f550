//! Hover preview history for the open menu.
//!
//! The stack renders bottom-to-top, so the most recent hover sits on top.
//! Each entry carries a stable id for keyed rendering; ids keep increasing
//! across resets so a re-inserted image always mounts a fresh node.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use std::collections::VecDeque;

use crate::state::catalog::DEFAULT_PREVIEW_IMAGE;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewEntry {
    pub id: u64,
    pub src: String,
    /// Entries added by hover play the reveal tween on mount; the default
    /// entry appears without motion.
    pub reveal: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewStack {
    entries: VecDeque<PreviewEntry>,
    capacity: usize,
    next_id: u64,
}

impl PreviewStack {
    /// Stack holding only the default image. A zero capacity is treated as 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let mut stack = Self { entries: VecDeque::new(), capacity: capacity.max(1), next_id: 0 };
        stack.reset();
        stack
    }

    /// Push a hovered image. Returns `false` when `src` is already on top.
    ///
    /// Oldest entries beyond capacity are dropped right after the insert.
    pub fn push(&mut self, src: &str) -> bool {
        if self.top().is_some_and(|entry| entry.src == src) {
            return false;
        }
        let entry = self.entry(src, true);
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        true
    }

    /// Drop history back to the single default image.
    pub fn reset(&mut self) {
        self.entries.clear();
        let entry = self.entry(DEFAULT_PREVIEW_IMAGE, false);
        self.entries.push_back(entry);
    }

    #[must_use]
    pub fn top(&self) -> Option<&PreviewEntry> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries from oldest (bottom) to newest (top).
    pub fn iter(&self) -> impl Iterator<Item = &PreviewEntry> {
        self.entries.iter()
    }

    fn entry(&mut self, src: &str, reveal: bool) -> PreviewEntry {
        let id = self.next_id;
        self.next_id += 1;
        PreviewEntry { id, src: src.to_owned(), reveal }
    }
}

impl Default for PreviewStack {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PREVIEW_CAPACITY)
    }
}
