#![forbid(unsafe_code)]

//! Codepad public facade crate.
//!
//! Re-exports the document model, the highlighter and the editor component,
//! and offers a prelude plus replay of recorded event traces.
//!
//! ```
//! use codepad::prelude::*;
//!
//! let code = highlight("{\"a\": 1}", LanguageId::Json, ThemeId::NightOwl);
//! assert_eq!(code.to_plain_text(), "{\"a\": 1}");
//! ```

use std::fmt;

// --- Text re-exports -------------------------------------------------------

pub use codepad_text::{Document, Edit, INDENT_UNIT, INDENT_WIDTH, Selection, edit, utf16_len};

// --- Syntax re-exports -----------------------------------------------------

pub use codepad_syntax::{
    HighlightTheme, HighlightedCode, Highlighter, LanguageId, Rgb, Style, StyledToken,
    SyntaxHighlighter, ThemeId, TokenKind, Tokenizer, highlight, palette,
};

// --- Editor re-exports -----------------------------------------------------

pub use codepad_editor::{
    CaretFixup, CodeEditor, EditorError, EditorEvent, EditorEventJson, EditorOptions, KeyCode,
    KeyInput, KeyOutcome, Modifiers, OverlaySurface, ScrollOffset, ScrollTarget, TextSurface,
    normalize_dom_key, pre_style, render_html,
};

#[cfg(feature = "test-helpers")]
pub use codepad_editor::testing;

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Codepad hosts.
#[derive(Debug)]
pub enum Error {
    /// The editor rejected an option or selector value.
    Editor(EditorError),
    /// A recorded event could not be decoded.
    Trace { line: usize, message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Editor(err) => write!(f, "{err}"),
            Self::Trace { line, message } => write!(f, "event trace line {line}: {message}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Editor(err) => Some(err),
            Self::Trace { .. } => None,
        }
    }
}

impl From<EditorError> for Error {
    fn from(err: EditorError) -> Self {
        Self::Editor(err)
    }
}

/// Standard result type for Codepad APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Replay ---------------------------------------------------------------

/// Decode a newline-delimited JSON event trace. Blank lines are skipped;
/// line numbers in errors are 1-based.
pub fn parse_trace(trace: &str) -> Result<Vec<EditorEvent>> {
    trace
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            EditorEvent::from_json_str(line).map_err(|err| Error::Trace {
                line: idx + 1,
                message: err.to_string(),
            })
        })
        .collect()
}

/// Feed a recorded trace into `editor`, applying each pending caret fix-up
/// after its event. Returns the number of events applied.
///
/// The whole trace is decoded before any event is applied.
pub fn replay<S, O, H>(editor: &mut CodeEditor<S, O, H>, trace: &str) -> Result<usize>
where
    S: TextSurface + ScrollTarget,
    O: OverlaySurface,
    H: Highlighter,
{
    let events = parse_trace(trace)?;
    for event in &events {
        editor.dispatch(event)?;
        editor.after_render();
    }
    Ok(events.len())
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CodeEditor, EditorEvent, EditorOptions, Error, HighlightedCode, KeyCode, KeyInput,
        KeyOutcome, LanguageId, Modifiers, OverlaySurface, Result, ScrollOffset, Selection,
        TextSurface, ThemeId, highlight,
    };
}
