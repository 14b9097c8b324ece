#![forbid(unsafe_code)]

//! Deferred caret placement.
//!
//! Writing a new value to a text input moves its caret to the end, and the
//! highlight re-render happens after the key handler returns. An intercepted
//! edit therefore commits in two phases:
//!
//! 1. [`FixupQueue::schedule`] records where the caret belongs once the new
//!    text is on screen.
//! 2. The host calls back after the next render and [`FixupQueue::take`]
//!    hands out the pending placement exactly once.
//!
//! Only the latest edit matters: scheduling again replaces a placement that
//! has not been applied yet.

/// A caret placement waiting for the next render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaretFixup {
    /// Caret offset in UTF-16 code units.
    pub caret: usize,
    /// Monotonic id of the edit that scheduled it.
    pub generation: u64,
}

/// Holds at most one pending [`CaretFixup`].
#[derive(Debug, Default)]
pub struct FixupQueue {
    pending: Option<CaretFixup>,
    generation: u64,
}

impl FixupQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a placement, superseding any pending one.
    pub fn schedule(&mut self, caret: usize) -> CaretFixup {
        self.generation += 1;
        let fixup = CaretFixup {
            caret,
            generation: self.generation,
        };
        self.pending = Some(fixup);
        fixup
    }

    /// Hand out the pending placement, if any.
    pub fn take(&mut self) -> Option<CaretFixup> {
        self.pending.take()
    }

    #[must_use]
    pub fn pending(&self) -> Option<CaretFixup> {
        self.pending
    }

    /// Drop a pending placement without applying it.
    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Generation of the most recently scheduled placement.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
