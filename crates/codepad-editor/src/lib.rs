#![forbid(unsafe_code)]

//! Editor component for Codepad.
//!
//! A [`CodeEditor`] keeps an editable [`TextSurface`] and a read-only
//! highlighted [`OverlaySurface`] showing the same document, and emulates
//! code-editor affordances inside a plain text input:
//!
//! - Tab inserts four spaces,
//! - Enter copies the current line's indentation,
//! - Backspace right after four spaces removes all of them.
//!
//! Intercepted edits commit in two phases (see [`fixup`]); scroll positions
//! are mirrored onto the overlay (see [`scroll`]).
//!
//! # Features
//! - `tracing`: structured logging of key handling, renders and
//!   configuration changes.
//! - `test-helpers`: in-memory surfaces in [`testing`].

pub mod component;
pub mod config;
pub mod controller;
pub mod error;
pub mod fixup;
pub mod input;
pub mod logging;
pub mod render;
pub mod scroll;
pub mod surface;
#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, info, info_span, trace, warn};

pub use component::{CodeEditor, ScrollTarget};
pub use config::{EditorOptions, LanguageOption, ThemeOption};
pub use controller::{InputController, KeyOutcome};
pub use error::{EditorError, Result};
pub use fixup::{CaretFixup, FixupQueue};
pub use input::{EditorEvent, EditorEventJson, KeyCode, KeyInput, Modifiers, normalize_dom_key};
pub use render::{escape_html, pre_style, render_html};
pub use scroll::ScrollSync;
pub use surface::{OverlaySurface, ScrollOffset, TextSurface};
