//! Property-based invariant tests for the indent-aware edits.
//!
//! Verifies:
//! 1. Tab at a caret inserts exactly the indent unit and lands after it.
//! 2. Enter inserts a newline plus the caret line's leading whitespace.
//! 3. Backspace after four spaces removes exactly those four characters.
//! 4. Backspace falls back to native behavior otherwise.
//! 5. Every edit leaves the caret on a valid offset of the new text.

use codepad_text::edit::{
    insert_indent, line_indent, native_backspace, newline_with_indent, outdent_backspace,
};
use codepad_text::{INDENT_UNIT, Selection, byte_index, utf16_len};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_code() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => prop::sample::select(vec![' ', '\n', '\t', '{', '}', '(', ')', ';']),
            4 => prop::char::range('a', 'z'),
            1 => prop::sample::select(vec!['é', '中', '😀']),
        ],
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// A document together with a caret on a char boundary.
fn arb_doc_and_caret() -> impl Strategy<Value = (String, usize)> {
    arb_code().prop_flat_map(|doc| {
        let boundaries: Vec<usize> = doc
            .char_indices()
            .map(|(idx, _)| utf16_len(&doc[..idx]))
            .chain(std::iter::once(utf16_len(&doc)))
            .collect();
        (Just(doc), prop::sample::select(boundaries))
    })
}

fn split_at16(doc: &str, offset: usize) -> (&str, &str) {
    doc.split_at(byte_index(doc, offset))
}

// ── Properties ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn tab_inserts_indent_unit((doc, p) in arb_doc_and_caret()) {
        let out = insert_indent(&doc, Selection::caret(p));
        let (before, after) = split_at16(&doc, p);
        prop_assert_eq!(out.text, format!("{before}{INDENT_UNIT}{after}"));
        prop_assert_eq!(out.caret, p + INDENT_UNIT.len());
    }

    #[test]
    fn enter_inherits_line_indent((doc, p) in arb_doc_and_caret()) {
        let indent = line_indent(&doc, p).to_string();
        let out = newline_with_indent(&doc, Selection::caret(p));
        let (before, after) = split_at16(&doc, p);
        prop_assert_eq!(out.text, format!("{before}\n{indent}{after}"));
        prop_assert_eq!(out.caret, p + 1 + utf16_len(&indent));
    }

    #[test]
    fn indent_is_prefix_of_caret_line((doc, p) in arb_doc_and_caret()) {
        let indent = line_indent(&doc, p);
        prop_assert!(indent.chars().all(char::is_whitespace));
        prop_assert!(!indent.contains('\n'));
    }

    #[test]
    fn backspace_after_indent_unit_removes_four((doc, p) in arb_doc_and_caret()) {
        let padded = {
            let (before, after) = split_at16(&doc, p);
            format!("{before}{INDENT_UNIT}{after}")
        };
        let caret = p + INDENT_UNIT.len();
        let out = outdent_backspace(&padded, Selection::caret(caret));
        prop_assert!(out.is_some());
        let out = out.unwrap();
        prop_assert_eq!(out.text, doc);
        prop_assert_eq!(out.caret, p);
    }

    #[test]
    fn backspace_without_full_unit_is_not_intercepted((doc, p) in arb_doc_and_caret()) {
        let (before, _) = split_at16(&doc, p);
        let out = outdent_backspace(&doc, Selection::caret(p));
        prop_assert_eq!(out.is_some(), before.ends_with(INDENT_UNIT));
        if out.is_none() && p > 0 {
            let native = native_backspace(&doc, Selection::caret(p));
            prop_assert_eq!(utf16_len(&native.text) + (p - native.caret), utf16_len(&doc));
        }
    }

    #[test]
    fn backspace_with_selection_is_never_intercepted(
        (doc, p) in arb_doc_and_caret(),
        extra in 1usize..8,
    ) {
        let sel = Selection::new(p, p + extra);
        prop_assert_eq!(outdent_backspace(&doc, sel), None);
    }

    #[test]
    fn caret_stays_within_new_text((doc, p) in arb_doc_and_caret()) {
        for out in [
            insert_indent(&doc, Selection::caret(p)),
            newline_with_indent(&doc, Selection::caret(p)),
            native_backspace(&doc, Selection::caret(p)),
        ] {
            prop_assert!(out.caret <= utf16_len(&out.text));
        }
    }
}
