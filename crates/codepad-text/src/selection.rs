#![forbid(unsafe_code)]

//! Selection range in UTF-16 code units.

/// A `(start, end)` range into the document, `start <= end`.
///
/// Offsets are UTF-16 code units from the start of the text, matching
/// `selectionStart` / `selectionEnd` of a DOM text input. `start == end`
/// is a caret with no selected text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection, ordering the endpoints.
    #[must_use]
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// A zero-width selection at `offset`.
    #[must_use]
    pub const fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Whether this is a caret (no selected text).
    #[must_use]
    pub const fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected code units.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether no text is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.is_caret()
    }

    /// Clamp both endpoints to `max`.
    #[must_use]
    pub fn clamped(self, max: usize) -> Self {
        Self {
            start: self.start.min(max),
            end: self.end.min(max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_orders_endpoints() {
        assert_eq!(Selection::new(5, 2), Selection { start: 2, end: 5 });
        assert_eq!(Selection::new(2, 5).len(), 3);
    }

    #[test]
    fn caret_is_empty() {
        let sel = Selection::caret(7);
        assert!(sel.is_caret());
        assert!(sel.is_empty());
        assert_eq!(sel.len(), 0);
    }

    #[test]
    fn clamped_limits_both_ends() {
        assert_eq!(Selection::new(3, 9).clamped(4), Selection::new(3, 4));
        assert_eq!(Selection::caret(10).clamped(0), Selection::caret(0));
    }
}
