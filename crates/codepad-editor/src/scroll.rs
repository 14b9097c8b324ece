#![forbid(unsafe_code)]

//! Keeps the highlight overlay scrolled with the input surface.

use crate::trace;
use crate::surface::{OverlaySurface, ScrollOffset};

/// Mirrors input scroll positions onto the overlay while attached.
///
/// Every event is forwarded as-is; there is no debouncing.
#[derive(Debug, Default)]
pub struct ScrollSync {
    attached: bool,
    last: Option<ScrollOffset>,
}

impl ScrollSync {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start mirroring. Called once both surfaces exist.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stop mirroring. Later events are ignored.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Last offset copied to the overlay.
    #[must_use]
    pub fn last(&self) -> Option<ScrollOffset> {
        self.last
    }

    /// Handle a scroll event from the input surface.
    ///
    /// Returns whether the offset was copied to the overlay.
    pub fn on_scroll<O: OverlaySurface + ?Sized>(
        &mut self,
        offset: ScrollOffset,
        overlay: &mut O,
    ) -> bool {
        if !self.attached {
            trace!(top = offset.top, left = offset.left, "scroll ignored: detached");
            return false;
        }
        overlay.set_scroll(offset);
        self.last = Some(offset);
        trace!(top = offset.top, left = offset.left, "scroll mirrored");
        true
    }
}
