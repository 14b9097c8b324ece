#![forbid(unsafe_code)]

//! WASM frontend for Codepad.
//!
//! Binds a [`codepad_editor::CodeEditor`] to a DOM `<textarea>` (input
//! surface) stacked over a `<pre>` (highlight overlay), plus optional
//! language and theme `<select>` elements:
//! - `keydown` goes through the input controller; intercepted keys call
//!   `preventDefault()` and restore the caret on a zero-delay timeout,
//! - `input` overwrites the document,
//! - `scroll` is mirrored onto the overlay.

pub mod selector;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::CodeEditorWeb;

/// Native builds compile this crate as a stub so `cargo check --workspace` stays
/// green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct CodeEditorWeb;

#[cfg(not(target_arch = "wasm32"))]
impl CodeEditorWeb {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}
