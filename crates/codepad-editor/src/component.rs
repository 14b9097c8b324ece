#![forbid(unsafe_code)]

//! The editor component.
//!
//! [`CodeEditor`] owns the document and wires the pieces together: key
//! events go through the [`InputController`], the document is re-highlighted
//! onto the overlay, caret placement is deferred through a [`FixupQueue`]
//! and scroll events are mirrored by a [`ScrollSync`].
//!
//! The component is host-driven and single-threaded. The host forwards DOM
//! events and calls [`CodeEditor::after_render`] from its "after the next
//! render" primitive (`setTimeout(.., 0)` in a browser).
//!
//! # Example
//! ```
//! # #[cfg(feature = "test-helpers")] {
//! use codepad_editor::testing::{MemoryOverlay, MemoryTextSurface};
//! use codepad_editor::{CodeEditor, EditorOptions, KeyCode, KeyInput};
//! use codepad_syntax::SyntaxHighlighter;
//!
//! let opts = EditorOptions::default().with_text("    x");
//! let mut editor = CodeEditor::mount(
//!     MemoryTextSurface::default(),
//!     MemoryOverlay::default(),
//!     SyntaxHighlighter,
//!     &opts,
//! );
//! editor.surface_mut().select(4, 4);
//! let outcome = editor.handle_key(&KeyInput::new(KeyCode::Backspace));
//! assert!(outcome.prevents_default());
//! editor.after_render();
//! assert_eq!(editor.text(), "x");
//! # }
//! ```

use codepad_syntax::{HighlightedCode, Highlighter, LanguageId, SyntaxHighlighter, ThemeId};
use codepad_text::{Document, Selection};

use crate::config::{EditorOptions, LanguageOption, ThemeOption};
use crate::controller::{InputController, KeyOutcome};
use crate::error::Result;
use crate::fixup::{CaretFixup, FixupQueue};
use crate::input::{EditorEvent, KeyInput};
use crate::{debug, info, info_span, trace, warn};
use crate::scroll::ScrollSync;
use crate::surface::{OverlaySurface, ScrollOffset, TextSurface};

/// Inputs of the last highlight pass.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RenderKey {
    text: String,
    language: LanguageId,
    theme: ThemeId,
}

/// A mounted code editor over a text surface and a highlight overlay.
pub struct CodeEditor<S, O, H = SyntaxHighlighter> {
    surface: S,
    overlay: O,
    highlighter: H,
    controller: InputController,
    document: Document,
    language: LanguageId,
    theme: ThemeId,
    fixups: FixupQueue,
    scroll: ScrollSync,
    last_render: Option<RenderKey>,
    highlighted: Option<HighlightedCode>,
    renders: u64,
    mounted: bool,
}

impl<S, O, H> CodeEditor<S, O, H>
where
    S: TextSurface,
    O: OverlaySurface,
    H: Highlighter,
{
    /// Mount over a pair of surfaces.
    ///
    /// Writes the initial text into the input, renders the overlay, starts
    /// scroll mirroring and focuses the input when `autofocus` is set.
    pub fn mount(surface: S, overlay: O, highlighter: H, options: &EditorOptions) -> Self {
        let span = info_span!("codepad.mount");
        let _guard = span.enter();

        let mut editor = Self {
            surface,
            overlay,
            highlighter,
            controller: InputController,
            document: Document::new(),
            language: options.language,
            theme: options.theme,
            fixups: FixupQueue::new(),
            scroll: ScrollSync::new(),
            last_render: None,
            highlighted: None,
            renders: 0,
            mounted: true,
        };
        editor.document.replace(options.initial_text.as_str());
        editor.surface.set_value(editor.document.as_str());
        editor.surface.set_caret_color(editor.theme.caret_color());
        editor.render();
        editor.scroll.attach();
        if options.autofocus {
            editor.surface.focus();
        }
        info!(
            language = %editor.language,
            theme = %editor.theme,
            doc_len = editor.document.len_utf16(),
            "editor mounted"
        );
        editor
    }

    // ====================================================================
    // Events
    // ====================================================================

    /// Handle a `keydown` on the input surface.
    ///
    /// An intercepted key replaces the document, writes it to the surface,
    /// re-renders and schedules a caret fix-up for [`Self::after_render`].
    /// The host must `preventDefault()` when the outcome says so.
    pub fn handle_key(&mut self, key: &KeyInput) -> KeyOutcome {
        if !self.mounted {
            return KeyOutcome::PassThrough;
        }
        let sel = self.surface.selection();
        let outcome = self
            .controller
            .handle_key(self.document.as_str(), key, sel);
        match &outcome {
            KeyOutcome::Intercepted(edit) => {
                debug!(
                    key = %key.code.to_code_string(),
                    caret = edit.caret,
                    doc_len = self.document.len_utf16(),
                    "key intercepted"
                );
                self.document.replace(edit.text.as_str());
                self.surface.set_value(self.document.as_str());
                self.render();
                self.fixups.schedule(edit.caret);
            }
            KeyOutcome::PassThrough => {
                trace!(key = %key.code.to_code_string(), "key passed through");
            }
        }
        outcome
    }

    /// Handle an `input` event: the surface value changed natively.
    ///
    /// The document is overwritten in full.
    pub fn handle_change(&mut self, value: &str) {
        if !self.mounted {
            return;
        }
        self.document.replace(value);
        self.render();
    }

    /// Second phase of an intercepted edit: place the caret.
    ///
    /// Returns the applied fix-up; `None` when nothing was pending.
    pub fn after_render(&mut self) -> Option<CaretFixup> {
        let fixup = self.fixups.take()?;
        let caret = fixup.caret.min(self.document.len_utf16());
        self.surface.set_selection(Selection::caret(caret));
        trace!(caret, generation = fixup.generation, "caret fix-up applied");
        Some(fixup)
    }

    /// Handle a `scroll` event on the input surface.
    ///
    /// Returns whether the overlay was moved.
    pub fn handle_scroll(&mut self) -> bool {
        let offset = self.surface.scroll();
        self.scroll.on_scroll(offset, &mut self.overlay)
    }

    /// Switch the highlight language. The document is untouched.
    pub fn set_language(&mut self, language: impl LanguageOption) -> Result<()> {
        let language = match language.resolve() {
            Ok(language) => language,
            Err(err) => {
                warn!(error = %err, "language rejected");
                return Err(err);
            }
        };
        if language != self.language {
            info!(from = %self.language, to = %language, "language changed");
            self.language = language;
        }
        self.render();
        Ok(())
    }

    /// Switch the highlight theme. The document is untouched.
    pub fn set_theme(&mut self, theme: impl ThemeOption) -> Result<()> {
        let theme = match theme.resolve() {
            Ok(theme) => theme,
            Err(err) => {
                warn!(error = %err, "theme rejected");
                return Err(err);
            }
        };
        if theme != self.theme {
            info!(from = %self.theme, to = %theme, "theme changed");
            self.theme = theme;
            self.surface.set_caret_color(theme.caret_color());
        }
        self.render();
        Ok(())
    }

    /// Apply a recorded or bridged event.
    ///
    /// Scroll events first move the input surface, then mirror it.
    pub fn dispatch(&mut self, event: &EditorEvent) -> Result<()>
    where
        S: ScrollTarget,
    {
        match event {
            EditorEvent::Key(key) => {
                self.handle_key(key);
            }
            EditorEvent::Change(value) => self.handle_change(value),
            EditorEvent::Scroll(offset) => {
                self.surface.scroll_to(*offset);
                self.handle_scroll();
            }
            EditorEvent::Language(language) => self.set_language(*language)?,
            EditorEvent::Theme(theme) => self.set_theme(*theme)?,
        }
        Ok(())
    }

    /// Detach from the surfaces. Later events are ignored.
    pub fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        self.scroll.detach();
        self.fixups.clear();
        self.mounted = false;
        info!("editor torn down");
    }

    // ====================================================================
    // Rendering
    // ====================================================================

    /// Re-highlight onto the overlay unless nothing changed since the last
    /// pass. Returns whether a new pass ran.
    pub fn render(&mut self) -> bool {
        let unchanged = self.last_render.as_ref().is_some_and(|key| {
            key.language == self.language
                && key.theme == self.theme
                && key.text == self.document.as_str()
        });
        if unchanged {
            trace!("render skipped: inputs unchanged");
            return false;
        }
        let code = self
            .highlighter
            .highlight(self.document.as_str(), self.language, self.theme);
        self.overlay.present(&code);
        self.highlighted = Some(code);
        self.last_render = Some(RenderKey {
            text: self.document.as_str().to_string(),
            language: self.language,
            theme: self.theme,
        });
        self.renders += 1;
        true
    }

    // ====================================================================
    // Accessors
    // ====================================================================

    /// Current document.
    #[must_use]
    pub fn text(&self) -> &str {
        self.document.as_str()
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn language(&self) -> LanguageId {
        self.language
    }

    #[must_use]
    pub fn theme(&self) -> ThemeId {
        self.theme
    }

    /// Output of the last highlight pass.
    #[must_use]
    pub fn highlighted(&self) -> Option<&HighlightedCode> {
        self.highlighted.as_ref()
    }

    /// Number of highlight passes run so far.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    #[must_use]
    pub fn pending_fixup(&self) -> Option<CaretFixup> {
        self.fixups.pending()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn scroll_sync(&self) -> &ScrollSync {
        &self.scroll
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut O {
        &mut self.overlay
    }
}

/// A text surface whose scroll position can be set, for replaying
/// recorded scroll events.
pub trait ScrollTarget {
    fn scroll_to(&mut self, offset: ScrollOffset);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;
    use crate::testing::{MemoryOverlay, MemoryTextSurface};
    use std::cell::Cell;
    use std::rc::Rc;

    type Editor = CodeEditor<MemoryTextSurface, MemoryOverlay>;

    fn mount(text: &str) -> Editor {
        CodeEditor::mount(
            MemoryTextSurface::default(),
            MemoryOverlay::default(),
            SyntaxHighlighter,
            &EditorOptions::default().with_text(text),
        )
    }

    #[test]
    fn mount_writes_text_renders_and_focuses() {
        let editor = mount("let a;");
        assert_eq!(editor.surface().value(), "let a;");
        assert!(editor.surface().is_focused());
        assert_eq!(editor.overlay().present_count(), 1);
        assert!(editor.scroll_sync().is_attached());
        assert_eq!(editor.render_count(), 1);
    }

    #[test]
    fn autofocus_can_be_disabled() {
        let editor: Editor = CodeEditor::mount(
            MemoryTextSurface::default(),
            MemoryOverlay::default(),
            SyntaxHighlighter,
            &EditorOptions::default().with_autofocus(false),
        );
        assert!(!editor.surface().is_focused());
    }

    #[test]
    fn caret_color_follows_theme() {
        let mut editor = mount("x");
        assert_eq!(
            editor.surface().caret_color(),
            Some(ThemeId::VsDark.caret_color())
        );
        editor.set_theme("duotoneLight").unwrap();
        assert_eq!(
            editor.surface().caret_color().map(|c| c.to_string()),
            Some("#000000".to_string())
        );
        assert!(editor.set_theme("nope").is_err());
        assert_eq!(
            editor.surface().caret_color(),
            Some(ThemeId::DuotoneLight.caret_color())
        );
        editor.set_theme(ThemeId::NightOwl).unwrap();
        assert_eq!(
            editor.surface().caret_color().map(|c| c.to_string()),
            Some("#ffffff".to_string())
        );
    }

    #[test]
    fn intercepted_key_defers_caret() {
        let mut editor = mount("ab");
        editor.surface_mut().select(1, 1);
        let outcome = editor.handle_key(&KeyInput::new(KeyCode::Tab));
        assert!(outcome.prevents_default());
        assert_eq!(editor.text(), "a    b");
        // Writing the value moved the caret to the end until the fix-up runs.
        assert_eq!(editor.surface().selection(), Selection::caret(6));
        let fixup = editor.after_render().expect("pending fix-up");
        assert_eq!(fixup.caret, 5);
        assert_eq!(editor.surface().selection(), Selection::caret(5));
        assert_eq!(editor.after_render(), None);
    }

    #[test]
    fn pass_through_leaves_document_alone() {
        let mut editor = mount("ab");
        editor.surface_mut().select(1, 1);
        let outcome = editor.handle_key(&KeyInput::new(KeyCode::Char('x')));
        assert_eq!(outcome, KeyOutcome::PassThrough);
        assert_eq!(editor.text(), "ab");
        assert_eq!(editor.pending_fixup(), None);
    }

    #[test]
    fn change_overwrites_document() {
        let mut editor = mount("old");
        editor.handle_change("new text");
        assert_eq!(editor.text(), "new text");
        let code = editor.highlighted().expect("rendered");
        assert_eq!(code.to_plain_text(), "new text");
    }

    #[test]
    fn render_is_memoized_on_unchanged_inputs() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let highlighter = move |code: &str, language: LanguageId, theme: ThemeId| {
            counter.set(counter.get() + 1);
            codepad_syntax::highlight(code, language, theme)
        };
        let mut editor = CodeEditor::mount(
            MemoryTextSurface::default(),
            MemoryOverlay::default(),
            highlighter,
            &EditorOptions::default().with_text("x"),
        );
        assert_eq!(calls.get(), 1);
        editor.handle_change("x");
        editor.set_theme(ThemeId::VsDark).unwrap();
        assert!(!editor.render());
        assert_eq!(calls.get(), 1);
        editor.set_theme("okaidia").unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn selectors_never_touch_the_document() {
        let mut editor = mount("{\"a\": 1}");
        editor.set_language("json").unwrap();
        editor.set_theme("nightOwl").unwrap();
        assert_eq!(editor.text(), "{\"a\": 1}");
        assert_eq!(editor.language(), LanguageId::Json);
        assert_eq!(editor.theme(), ThemeId::NightOwl);
        assert_eq!(editor.overlay().last().map(|c| c.theme), Some(ThemeId::NightOwl));
    }

    #[test]
    fn rejected_selector_keeps_state() {
        let mut editor = mount("x");
        let renders = editor.render_count();
        assert!(editor.set_language("python").is_err());
        assert!(editor.set_theme("dracula").is_err());
        assert_eq!(editor.language(), LanguageId::Jsx);
        assert_eq!(editor.theme(), ThemeId::VsDark);
        assert_eq!(editor.render_count(), renders);
    }

    #[test]
    fn scroll_is_mirrored_until_teardown() {
        let mut editor = mount("x");
        editor.surface_mut().scroll_to(ScrollOffset::new(40, 2));
        assert!(editor.handle_scroll());
        assert_eq!(editor.overlay().scroll(), ScrollOffset::new(40, 2));

        editor.teardown();
        editor.surface_mut().scroll_to(ScrollOffset::new(80, 0));
        assert!(!editor.handle_scroll());
        assert_eq!(editor.overlay().scroll(), ScrollOffset::new(40, 2));
    }

    #[test]
    fn teardown_drops_pending_fixup_and_ignores_keys() {
        let mut editor = mount("");
        editor.handle_key(&KeyInput::new(KeyCode::Tab));
        editor.teardown();
        assert_eq!(editor.after_render(), None);
        assert_eq!(
            editor.handle_key(&KeyInput::new(KeyCode::Tab)),
            KeyOutcome::PassThrough
        );
        assert!(!editor.is_mounted());
    }

    #[test]
    fn dispatch_replays_events() {
        let mut editor = mount("");
        let events = [
            EditorEvent::Change("a".into()),
            EditorEvent::Language(LanguageId::Css),
            EditorEvent::Scroll(ScrollOffset::new(7, 0)),
        ];
        for event in &events {
            editor.dispatch(event).unwrap();
        }
        assert_eq!(editor.text(), "a");
        assert_eq!(editor.language(), LanguageId::Css);
        assert_eq!(editor.overlay().scroll(), ScrollOffset::new(7, 0));
    }

    #[cfg(feature = "tracing")]
    mod logging {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn intercepted_keys_are_logged() {
            let mut editor = mount("    ");
            editor.surface_mut().select(4, 4);
            editor.handle_key(&KeyInput::new(KeyCode::Backspace));
            assert!(logs_contain("key intercepted"));
        }

        #[traced_test]
        #[test]
        fn rejected_theme_is_logged() {
            let mut editor = mount("");
            let _ = editor.set_theme("solarized");
            assert!(logs_contain("theme rejected"));
        }
    }
}
