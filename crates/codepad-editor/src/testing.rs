#![forbid(unsafe_code)]

//! In-memory surfaces that behave like a browser `<textarea>` and `<pre>`.
//!
//! [`MemoryTextSurface`] follows browser semantics where the editor depends
//! on them: writing a value moves the selection to the end, and native keys
//! ([`type_text`], [`press`]) edit the value and then report it through an
//! `input` event.

use codepad_syntax::{HighlightedCode, Highlighter, Rgb};
use codepad_text::{Selection, edit, utf16_len};

use crate::component::{CodeEditor, ScrollTarget};
use crate::controller::KeyOutcome;
use crate::input::{KeyCode, KeyInput};
use crate::surface::{OverlaySurface, ScrollOffset, TextSurface};

/// A text input held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTextSurface {
    value: String,
    selection: Selection,
    scroll: ScrollOffset,
    focused: bool,
    caret_color: Option<Rgb>,
    writes: usize,
}

impl MemoryTextSurface {
    /// Place the selection, clamped to the value.
    pub fn select(&mut self, start: usize, end: usize) {
        self.selection = Selection::new(start, end).clamped(utf16_len(&self.value));
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Last caret color applied, if any.
    #[must_use]
    pub fn caret_color(&self) -> Option<Rgb> {
        self.caret_color
    }

    /// Number of `set_value` calls.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl TextSurface for MemoryTextSurface {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.selection = Selection::caret(utf16_len(value));
        self.writes += 1;
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamped(utf16_len(&self.value));
    }

    fn scroll(&self) -> ScrollOffset {
        self.scroll
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn set_caret_color(&mut self, color: Rgb) {
        self.caret_color = Some(color);
    }
}

impl ScrollTarget for MemoryTextSurface {
    fn scroll_to(&mut self, offset: ScrollOffset) {
        self.scroll = offset;
    }
}

/// A highlight overlay held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryOverlay {
    last: Option<HighlightedCode>,
    presents: usize,
    scroll: ScrollOffset,
}

impl MemoryOverlay {
    /// Most recently presented token lines.
    #[must_use]
    pub fn last(&self) -> Option<&HighlightedCode> {
        self.last.as_ref()
    }

    #[must_use]
    pub fn present_count(&self) -> usize {
        self.presents
    }

    #[must_use]
    pub fn scroll(&self) -> ScrollOffset {
        self.scroll
    }
}

impl OverlaySurface for MemoryOverlay {
    fn present(&mut self, code: &HighlightedCode) {
        self.last = Some(code.clone());
        self.presents += 1;
    }

    fn set_scroll(&mut self, offset: ScrollOffset) {
        self.scroll = offset;
    }
}

/// Editor over in-memory surfaces.
pub type MemoryEditor<H> = CodeEditor<MemoryTextSurface, MemoryOverlay, H>;

/// Press one key the way a browser would deliver it.
///
/// The editor sees the `keydown` first. When it passes the key through, the
/// surface applies the native edit (typed character or Backspace) and the
/// editor receives the `input` event. The pending caret fix-up, if any, runs
/// afterwards as it would after the next render.
pub fn press<H: Highlighter>(editor: &mut MemoryEditor<H>, key: KeyInput) -> KeyOutcome {
    let outcome = editor.handle_key(&key);
    if outcome == KeyOutcome::PassThrough && !key.is_shortcut() {
        let value = editor.surface().value();
        let sel = editor.surface().selection();
        let native = match key.code {
            KeyCode::Char(ch) => Some(edit::native_insert(&value, sel, ch.encode_utf8(&mut [0; 4]))),
            KeyCode::Backspace => Some(edit::native_backspace(&value, sel)),
            _ => None,
        };
        if let Some(native) = native {
            let surface = editor.surface_mut();
            surface.value = native.text;
            surface.selection = Selection::caret(native.caret);
            let value = surface.value.clone();
            editor.handle_change(&value);
        }
    }
    editor.after_render();
    outcome
}

/// Type `text` one key at a time; `'\n'` is delivered as Enter.
pub fn type_text<H: Highlighter>(editor: &mut MemoryEditor<H>, text: &str) {
    for ch in text.chars() {
        let code = match ch {
            '\n' => KeyCode::Enter,
            '\t' => KeyCode::Tab,
            other => KeyCode::Char(other),
        };
        press(editor, KeyInput::new(code));
    }
}
