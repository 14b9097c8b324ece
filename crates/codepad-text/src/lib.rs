#![forbid(unsafe_code)]

//! Text store for the Codepad editor.
//!
//! The editor keeps its whole content in a single [`Document`] string and
//! addresses it with [`Selection`] offsets measured in UTF-16 code units, the
//! unit a browser text input reports. Line boundaries are never stored; they
//! are derived by splitting on `'\n'` whenever a caller needs them.
//!
//! The [`edit`] module holds the editor affordances (Tab, auto-indenting
//! Enter, indent-aware Backspace) as pure functions from
//! `(document, selection)` to an [`Edit`].
//!
//! # Example
//! ```
//! use codepad_text::{Selection, edit};
//!
//! let out = edit::insert_indent("ab", Selection::caret(1));
//! assert_eq!(out.text, "a    b");
//! assert_eq!(out.caret, 5);
//! ```

pub mod document;
pub mod edit;
pub mod selection;

pub use document::{Document, byte_index, utf16_len};
pub use edit::{Edit, INDENT_UNIT, INDENT_WIDTH};
pub use selection::Selection;
