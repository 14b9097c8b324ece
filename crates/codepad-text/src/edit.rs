#![forbid(unsafe_code)]

//! Editor affordances as pure document transformations.
//!
//! Each function takes the current document and selection and returns the
//! new document together with the caret position the input surface should
//! show once the new text has been committed. Nothing here touches a
//! surface; the editor component decides when to apply the result.
//!
//! # Example
//! ```
//! use codepad_text::{Selection, edit};
//!
//! // Enter copies the indentation of the caret line.
//! let out = edit::newline_with_indent("    let x;", Selection::caret(10));
//! assert_eq!(out.text, "    let x;\n    ");
//! assert_eq!(out.caret, 15);
//!
//! // Backspace after a full indent unit removes all four spaces.
//! let out = edit::outdent_backspace(&out.text, Selection::caret(out.caret)).unwrap();
//! assert_eq!(out.text, "    let x;\n");
//! ```

use crate::document::{byte_index, utf16_len};
use crate::selection::Selection;

/// The string inserted by Tab and removed by an indent-aware Backspace.
pub const INDENT_UNIT: &str = "    ";

/// Width of [`INDENT_UNIT`] in UTF-16 code units.
pub const INDENT_WIDTH: usize = INDENT_UNIT.len();

/// Result of an edit: the replacement document and the caret to restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Full new document text.
    pub text: String,
    /// Caret offset (UTF-16 code units) after the edit is committed.
    pub caret: usize,
}

/// Byte range covered by `sel` in `doc`, clamped to the document.
fn byte_range(doc: &str, sel: Selection) -> (usize, usize) {
    let start = byte_index(doc, sel.start);
    let end = byte_index(doc, sel.end).max(start);
    (start, end)
}

/// Replace the selected range with `insert`.
fn splice(doc: &str, start: usize, end: usize, insert: &str) -> String {
    let mut out = String::with_capacity(doc.len() - (end - start) + insert.len());
    out.push_str(&doc[..start]);
    out.push_str(insert);
    out.push_str(&doc[end..]);
    out
}

/// UTF-16 offset of the byte index `byte` in `doc`.
fn utf16_offset(doc: &str, byte: usize) -> usize {
    utf16_len(&doc[..byte])
}

// ====================================================================
// Indentation
// ====================================================================

/// Leading whitespace of the line containing the UTF-16 `offset`.
///
/// Only the caret line is inspected. Whitespace follows
/// [`char::is_whitespace`], so tabs and non-breaking spaces count too.
#[must_use]
pub fn line_indent(doc: &str, offset: usize) -> &str {
    let caret = byte_index(doc, offset);
    let line_start = doc[..caret].rfind('\n').map_or(0, |nl| nl + 1);
    let line_end = doc[line_start..]
        .find('\n')
        .map_or(doc.len(), |nl| line_start + nl);
    let line = &doc[line_start..line_end];
    let indent_len = line
        .char_indices()
        .find(|(_, ch)| !ch.is_whitespace())
        .map_or(line.len(), |(idx, _)| idx);
    &line[..indent_len]
}

// ====================================================================
// Intercepted keys
// ====================================================================

/// Tab: insert [`INDENT_UNIT`] at the caret, replacing any selection.
#[must_use]
pub fn insert_indent(doc: &str, sel: Selection) -> Edit {
    let (start, end) = byte_range(doc, sel);
    let text = splice(doc, start, end, INDENT_UNIT);
    Edit {
        caret: utf16_offset(doc, start) + INDENT_WIDTH,
        text,
    }
}

/// Enter: insert a newline followed by the caret line's indentation.
///
/// The indentation is taken from the whole leading whitespace run of the
/// line, even when the caret sits inside that run.
#[must_use]
pub fn newline_with_indent(doc: &str, sel: Selection) -> Edit {
    let (start, end) = byte_range(doc, sel);
    let indent = line_indent(doc, sel.start);
    let mut insert = String::with_capacity(1 + indent.len());
    insert.push('\n');
    insert.push_str(indent);
    let text = splice(doc, start, end, &insert);
    Edit {
        caret: utf16_offset(doc, start) + 1 + utf16_len(indent),
        text,
    }
}

/// Backspace over a whole indent unit.
///
/// Returns `None` when a selection is active or the text before the caret
/// does not end with [`INDENT_UNIT`]; the caller then lets the native
/// single-character deletion run. The unit is not required to start on a
/// multiple-of-four column.
#[must_use]
pub fn outdent_backspace(doc: &str, sel: Selection) -> Option<Edit> {
    if !sel.is_caret() {
        return None;
    }
    let caret = byte_index(doc, sel.start);
    if !doc[..caret].ends_with(INDENT_UNIT) {
        return None;
    }
    let unit_start = caret - INDENT_UNIT.len();
    let text = splice(doc, unit_start, caret, "");
    Some(Edit {
        caret: utf16_offset(doc, unit_start),
        text,
    })
}

// ====================================================================
// Native behavior
// ====================================================================

/// Default input behavior for typed text: replace the selection.
#[must_use]
pub fn native_insert(doc: &str, sel: Selection, insert: &str) -> Edit {
    let (start, end) = byte_range(doc, sel);
    let text = splice(doc, start, end, insert);
    Edit {
        caret: utf16_offset(doc, start) + utf16_len(insert),
        text,
    }
}

/// Default Backspace: delete the selection, or the character before the
/// caret. At offset 0 with no selection the document is unchanged.
#[must_use]
pub fn native_backspace(doc: &str, sel: Selection) -> Edit {
    let (start, end) = byte_range(doc, sel);
    if start != end {
        return Edit {
            text: splice(doc, start, end, ""),
            caret: utf16_offset(doc, start),
        };
    }
    let Some((prev, _)) = doc[..start].char_indices().next_back() else {
        return Edit {
            text: doc.to_string(),
            caret: 0,
        };
    };
    Edit {
        text: splice(doc, prev, start, ""),
        caret: utf16_offset(doc, prev),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_unit_is_four_spaces() {
        assert_eq!(INDENT_UNIT, "    ");
        assert_eq!(INDENT_WIDTH, 4);
    }

    #[test]
    fn tab_into_empty_document() {
        let out = insert_indent("", Selection::caret(0));
        assert_eq!(out.text, "    ");
        assert_eq!(out.caret, 4);
    }

    #[test]
    fn tab_replaces_selection() {
        let out = insert_indent("abcdef", Selection::new(1, 4));
        assert_eq!(out.text, "a    ef");
        assert_eq!(out.caret, 5);
    }

    #[test]
    fn tab_after_astral_char_counts_utf16() {
        let out = insert_indent("😀x", Selection::caret(2));
        assert_eq!(out.text, "😀    x");
        assert_eq!(out.caret, 6);
    }

    #[test]
    fn tab_with_offset_past_end_appends() {
        let out = insert_indent("ab", Selection::caret(9));
        assert_eq!(out.text, "ab    ");
        assert_eq!(out.caret, 6);
    }

    #[test]
    fn line_indent_of_first_line() {
        assert_eq!(line_indent("  a\nb", 1), "  ");
        assert_eq!(line_indent("  a\nb", 3), "  ");
    }

    #[test]
    fn line_indent_only_uses_caret_line() {
        let doc = "        deep\nflat";
        assert_eq!(line_indent(doc, 15), "");
        assert_eq!(line_indent(doc, 5), "        ");
    }

    #[test]
    fn line_indent_mixed_whitespace() {
        assert_eq!(line_indent("\t  x", 4), "\t  ");
    }

    #[test]
    fn line_indent_whitespace_only_line() {
        assert_eq!(line_indent("a\n    ", 6), "    ");
    }

    #[test]
    fn enter_without_indent() {
        let out = newline_with_indent("if(x){", Selection::caret(6));
        assert_eq!(out.text, "if(x){\n");
        assert_eq!(out.caret, 7);
    }

    #[test]
    fn enter_copies_indent() {
        let out = newline_with_indent("    foo();", Selection::caret(10));
        assert_eq!(out.text, "    foo();\n    ");
        assert_eq!(out.caret, 15);
    }

    #[test]
    fn enter_in_middle_of_line_splits_it() {
        let out = newline_with_indent("  ab", Selection::caret(3));
        assert_eq!(out.text, "  a\n  b");
        assert_eq!(out.caret, 6);
    }

    #[test]
    fn enter_inside_leading_whitespace_copies_full_run() {
        let out = newline_with_indent("    x", Selection::caret(2));
        assert_eq!(out.text, "  \n      x");
        assert_eq!(out.caret, 7);
    }

    #[test]
    fn enter_replaces_selection() {
        let out = newline_with_indent("  abc\nzz", Selection::new(3, 7));
        assert_eq!(out.text, "  a\n  z");
        assert_eq!(out.caret, 6);
    }

    #[test]
    fn enter_on_second_line() {
        let doc = "a\n\tb";
        let out = newline_with_indent(doc, Selection::caret(4));
        assert_eq!(out.text, "a\n\tb\n\t");
        assert_eq!(out.caret, 6);
    }

    #[test]
    fn backspace_removes_indent_unit() {
        let out = outdent_backspace("    abc", Selection::caret(4)).unwrap();
        assert_eq!(out.text, "abc");
        assert_eq!(out.caret, 0);
    }

    #[test]
    fn backspace_removes_only_one_unit() {
        let out = outdent_backspace("        x", Selection::caret(8)).unwrap();
        assert_eq!(out.text, "    x");
        assert_eq!(out.caret, 4);
    }

    #[test]
    fn backspace_ignores_short_runs() {
        assert_eq!(outdent_backspace("   x", Selection::caret(3)), None);
        assert_eq!(outdent_backspace("", Selection::caret(0)), None);
    }

    #[test]
    fn backspace_ignores_selection() {
        assert_eq!(outdent_backspace("    abc", Selection::new(0, 4)), None);
    }

    #[test]
    fn backspace_unaligned_unit_is_still_removed() {
        // "a" + 4 spaces: the unit starts at column 1, not on a tab stop.
        let out = outdent_backspace("a    b", Selection::caret(5)).unwrap();
        assert_eq!(out.text, "ab");
        assert_eq!(out.caret, 1);
    }

    #[test]
    fn backspace_does_not_treat_tabs_as_unit() {
        assert_eq!(outdent_backspace("\t\t\t\tx", Selection::caret(4)), None);
    }

    #[test]
    fn native_insert_replaces_selection() {
        let out = native_insert("hello", Selection::new(1, 5), "ey");
        assert_eq!(out.text, "hey");
        assert_eq!(out.caret, 3);
    }

    #[test]
    fn native_backspace_deletes_one_char() {
        let out = native_backspace("   x", Selection::caret(3));
        assert_eq!(out.text, "  x");
        assert_eq!(out.caret, 2);
    }

    #[test]
    fn native_backspace_at_start_is_noop() {
        let out = native_backspace("abc", Selection::caret(0));
        assert_eq!(out.text, "abc");
        assert_eq!(out.caret, 0);
    }

    #[test]
    fn native_backspace_deletes_selection() {
        let out = native_backspace("abcdef", Selection::new(2, 4));
        assert_eq!(out.text, "abef");
        assert_eq!(out.caret, 2);
    }

    #[test]
    fn native_backspace_removes_whole_astral_char() {
        let out = native_backspace("a😀", Selection::caret(3));
        assert_eq!(out.text, "a");
        assert_eq!(out.caret, 1);
    }
}
