#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::rc::Rc;

use codepad_editor::{
    CodeEditor, EditorOptions, KeyInput, Modifiers, OverlaySurface, ScrollOffset, TextSurface,
    normalize_dom_key, render_html,
};
use codepad_syntax::{HighlightedCode, Rgb, SyntaxHighlighter};
use codepad_text::Selection;
use js_sys::{Array, Function};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Event, EventTarget, HtmlOptionElement, HtmlPreElement, HtmlSelectElement, HtmlTextAreaElement,
    KeyboardEvent,
};

use crate::selector::{language_options, theme_options};

// ---------------------------------------------------------------------------
// DOM surfaces
// ---------------------------------------------------------------------------

struct DomTextArea {
    el: HtmlTextAreaElement,
}

impl TextSurface for DomTextArea {
    fn value(&self) -> String {
        self.el.value()
    }

    fn set_value(&mut self, value: &str) {
        self.el.set_value(value);
    }

    fn selection(&self) -> Selection {
        let start = self.el.selection_start().ok().flatten().unwrap_or(0);
        let end = self.el.selection_end().ok().flatten().unwrap_or(start);
        Selection::new(start as usize, end as usize)
    }

    fn set_selection(&mut self, selection: Selection) {
        let _ = self
            .el
            .set_selection_range(selection.start as u32, selection.end as u32);
    }

    fn scroll(&self) -> ScrollOffset {
        ScrollOffset::new(self.el.scroll_top(), self.el.scroll_left())
    }

    fn focus(&mut self) {
        let _ = self.el.focus();
    }

    fn set_caret_color(&mut self, color: Rgb) {
        let _ = self
            .el
            .style()
            .set_property("caret-color", &color.to_string());
    }
}

struct DomOverlay {
    el: HtmlPreElement,
}

impl OverlaySurface for DomOverlay {
    fn present(&mut self, code: &HighlightedCode) {
        self.el.set_inner_html(&render_html(code));
        let style = self.el.style();
        let _ = style.set_property("background-color", &code.background.to_string());
        let _ = style.set_property("color", &code.foreground.to_string());
    }

    fn set_scroll(&mut self, offset: ScrollOffset) {
        self.el.set_scroll_top(offset.top);
        self.el.set_scroll_left(offset.left);
    }
}

const PLACEHOLDER: &str = "Write your code here";

type WebEditor = CodeEditor<DomTextArea, DomOverlay, SyntaxHighlighter>;
type Listener = Closure<dyn FnMut(Event)>;

fn js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ---------------------------------------------------------------------------
// Exported component
// ---------------------------------------------------------------------------

/// Code editor bound to a `<textarea>` stacked over a `<pre>`.
#[wasm_bindgen]
pub struct CodeEditorWeb {
    editor: Rc<RefCell<WebEditor>>,
    listeners: Vec<(EventTarget, &'static str, Listener)>,
}

#[wasm_bindgen]
impl CodeEditorWeb {
    /// Mount over `textarea` and `pre`. `options` is optional JSON such as
    /// `{"language":"json","theme":"nightOwl","initialText":"{}"}`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        textarea: HtmlTextAreaElement,
        pre: HtmlPreElement,
        options: Option<String>,
    ) -> Result<CodeEditorWeb, JsValue> {
        let options = EditorOptions::from_json(options.as_deref().unwrap_or("")).map_err(js_err)?;
        textarea.set_spellcheck(false);
        textarea.set_placeholder(PLACEHOLDER);
        let editor = CodeEditor::mount(
            DomTextArea {
                el: textarea.clone(),
            },
            DomOverlay { el: pre },
            SyntaxHighlighter,
            &options,
        );
        let mut this = Self {
            editor: Rc::new(RefCell::new(editor)),
            listeners: Vec::new(),
        };

        let target: EventTarget = textarea.clone().unchecked_into();
        let keydown = this.keydown_listener();
        this.listen(&target, "keydown", keydown)?;

        let editor = Rc::clone(&this.editor);
        let input_el = textarea.clone();
        this.listen(
            &target,
            "input",
            Closure::new(move |_event: Event| {
                editor.borrow_mut().handle_change(&input_el.value());
            }),
        )?;

        let editor = Rc::clone(&this.editor);
        this.listen(
            &target,
            "scroll",
            Closure::new(move |_event: Event| {
                editor.borrow_mut().handle_scroll();
            }),
        )?;

        Ok(this)
    }

    /// Populate the two selectors and follow their `change` events.
    #[wasm_bindgen(js_name = bindSelectors)]
    pub fn bind_selectors(
        &mut self,
        language: HtmlSelectElement,
        theme: HtmlSelectElement,
    ) -> Result<(), JsValue> {
        let (current_language, current_theme) = {
            let editor = self.editor.borrow();
            (editor.language(), editor.theme())
        };
        fill_select(&language, &language_options(), current_language.as_str())?;
        fill_select(&theme, &theme_options(), current_theme.name())?;

        let editor = Rc::clone(&self.editor);
        let select = language.clone();
        self.listen(
            &language.unchecked_into::<EventTarget>(),
            "change",
            Closure::new(move |_event: Event| {
                let _ = editor.borrow_mut().set_language(select.value().as_str());
            }),
        )?;

        let editor = Rc::clone(&self.editor);
        let select = theme.clone();
        self.listen(
            &theme.unchecked_into::<EventTarget>(),
            "change",
            Closure::new(move |_event: Event| {
                let _ = editor.borrow_mut().set_theme(select.value().as_str());
            }),
        )
    }

    #[wasm_bindgen(js_name = setLanguage)]
    pub fn set_language(&mut self, language: &str) -> Result<(), JsValue> {
        self.editor.borrow_mut().set_language(language).map_err(js_err)
    }

    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&mut self, theme: &str) -> Result<(), JsValue> {
        self.editor.borrow_mut().set_theme(theme).map_err(js_err)
    }

    /// Current document text.
    pub fn text(&self) -> String {
        self.editor.borrow().text().to_string()
    }

    pub fn language(&self) -> String {
        self.editor.borrow().language().as_str().to_string()
    }

    pub fn theme(&self) -> String {
        self.editor.borrow().theme().name().to_string()
    }

    /// Option values for a language `<select>`.
    pub fn languages() -> Array {
        language_options().into_iter().map(JsValue::from_str).collect()
    }

    /// Option values for a theme `<select>`.
    pub fn themes() -> Array {
        theme_options().into_iter().map(JsValue::from_str).collect()
    }

    /// Explicit teardown: detach every listener and stop the editor.
    pub fn destroy(&mut self) {
        self.detach();
    }
}

impl Drop for CodeEditorWeb {
    fn drop(&mut self) {
        self.detach();
    }
}

impl CodeEditorWeb {
    /// Unregister listeners before their closures are freed. Idempotent.
    fn detach(&mut self) {
        for (target, name, listener) in self.listeners.drain(..) {
            let _ = target
                .remove_event_listener_with_callback(name, listener.as_ref().unchecked_ref());
        }
        self.editor.borrow_mut().teardown();
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        name: &'static str,
        listener: Listener,
    ) -> Result<(), JsValue> {
        target.add_event_listener_with_callback(name, listener.as_ref().unchecked_ref())?;
        self.listeners.push((target.clone(), name, listener));
        Ok(())
    }

    fn keydown_listener(&self) -> Listener {
        let editor = Rc::clone(&self.editor);
        Closure::new(move |event: Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let mods = Modifiers::from_dom(
                event.shift_key(),
                event.alt_key(),
                event.ctrl_key(),
                event.meta_key(),
            );
            let key = KeyInput::new(normalize_dom_key(&event.key(), &event.code(), mods))
                .with_mods(mods);
            let outcome = editor.borrow_mut().handle_key(&key);
            if outcome.prevents_default() {
                event.prevent_default();
                schedule_fixup(&editor);
            }
        })
    }
}

/// Apply the pending caret fix-up once the browser has painted the new value.
fn schedule_fixup(editor: &Rc<RefCell<WebEditor>>) {
    let Some(window) = web_sys::window() else {
        editor.borrow_mut().after_render();
        return;
    };
    let editor = Rc::clone(editor);
    let callback = Closure::once_into_js(move || {
        editor.borrow_mut().after_render();
    });
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref::<Function>(),
        0,
    );
}

fn fill_select(select: &HtmlSelectElement, values: &[&str], current: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    select.set_inner_html("");
    for value in values {
        let option: HtmlOptionElement = document.create_element("option")?.unchecked_into();
        option.set_value(value);
        option.set_text(value);
        select.append_child(&option)?;
    }
    select.set_value(current);
    Ok(())
}
