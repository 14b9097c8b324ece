#![forbid(unsafe_code)]

//! Host surfaces the editor drives.
//!
//! The editor never touches a DOM directly. A [`TextSurface`] is the
//! editable input (a `<textarea>` in the browser); an [`OverlaySurface`] is
//! the read-only highlight layer drawn underneath it in the same box.

use codepad_syntax::{HighlightedCode, Rgb};
use codepad_text::Selection;
use serde::{Deserialize, Serialize};

/// Scroll position of a surface, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub top: i32,
    pub left: i32,
}

impl ScrollOffset {
    #[must_use]
    pub const fn new(top: i32, left: i32) -> Self {
        Self { top, left }
    }
}

/// The editable text input.
///
/// Offsets are UTF-16 code units, as reported by `selectionStart` /
/// `selectionEnd`.
pub trait TextSurface {
    /// Current value of the input.
    fn value(&self) -> String;

    /// Replace the input value. Browsers move the selection to the end.
    fn set_value(&mut self, value: &str);

    fn selection(&self) -> Selection;

    fn set_selection(&mut self, selection: Selection);

    fn scroll(&self) -> ScrollOffset;

    /// Give the input keyboard focus.
    fn focus(&mut self);

    /// Color of the text caret. The input's own text is transparent, so the
    /// caret must contrast with the overlay background.
    fn set_caret_color(&mut self, color: Rgb);
}

/// The non-interactive highlight layer.
pub trait OverlaySurface {
    /// Replace the displayed token lines.
    fn present(&mut self, code: &HighlightedCode);

    /// Mirror the input's scroll position.
    fn set_scroll(&mut self, offset: ScrollOffset);
}
