#![forbid(unsafe_code)]

//! Key dispatch: which keys the editor takes over from the input surface.

use codepad_text::{Edit, Selection, edit};

use crate::input::{KeyCode, KeyInput, Modifiers};

/// What the host should do with a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The editor handled the key. The host must suppress the native
    /// behavior; the edit is applied by the editor.
    Intercepted(Edit),
    /// Let the surface handle the key natively.
    PassThrough,
}

impl KeyOutcome {
    /// Whether the host must call `preventDefault()`.
    #[must_use]
    pub const fn prevents_default(&self) -> bool {
        matches!(self, Self::Intercepted(_))
    }

    #[must_use]
    pub fn edit(&self) -> Option<&Edit> {
        match self {
            Self::Intercepted(edit) => Some(edit),
            Self::PassThrough => None,
        }
    }
}

/// Maps Tab, Enter and Backspace onto the indent-aware edits.
///
/// Shortcuts (Ctrl, Alt or Meta held) and Shift+Tab keep their native
/// behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputController;

impl InputController {
    #[must_use]
    pub fn handle_key(&self, doc: &str, key: &KeyInput, sel: Selection) -> KeyOutcome {
        if key.is_shortcut() {
            return KeyOutcome::PassThrough;
        }
        let edit = match key.code {
            // Shift+Tab reaches here as `Tab` from hosts that do not normalize it.
            KeyCode::Tab if key.mods.contains(Modifiers::SHIFT) => None,
            KeyCode::Tab => Some(edit::insert_indent(doc, sel)),
            KeyCode::Enter => Some(edit::newline_with_indent(doc, sel)),
            KeyCode::Backspace => edit::outdent_backspace(doc, sel),
            _ => None,
        };
        edit.map_or(KeyOutcome::PassThrough, KeyOutcome::Intercepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyInput {
        KeyInput::new(code)
    }

    #[test]
    fn tab_is_intercepted() {
        let out = InputController.handle_key("x", &key(KeyCode::Tab), Selection::caret(0));
        assert!(out.prevents_default());
        assert_eq!(out.edit().map(|e| e.text.as_str()), Some("    x"));
    }

    #[test]
    fn enter_is_intercepted() {
        let out = InputController.handle_key("  a", &key(KeyCode::Enter), Selection::caret(3));
        assert_eq!(
            out,
            KeyOutcome::Intercepted(Edit {
                text: "  a\n  ".into(),
                caret: 6
            })
        );
    }

    #[test]
    fn backspace_only_over_a_full_unit() {
        let hit = InputController.handle_key("    a", &key(KeyCode::Backspace), Selection::caret(4));
        assert!(hit.prevents_default());
        let miss = InputController.handle_key("  a", &key(KeyCode::Backspace), Selection::caret(2));
        assert_eq!(miss, KeyOutcome::PassThrough);
    }

    #[test]
    fn other_keys_pass_through() {
        for code in [KeyCode::Char('a'), KeyCode::Delete, KeyCode::Left, KeyCode::BackTab] {
            let out = InputController.handle_key("abc", &key(code), Selection::caret(1));
            assert_eq!(out, KeyOutcome::PassThrough);
        }
    }

    #[test]
    fn shortcuts_pass_through() {
        for mods in [Modifiers::CTRL, Modifiers::ALT, Modifiers::SUPER] {
            let tab = key(KeyCode::Tab).with_mods(mods);
            let out = InputController.handle_key("", &tab, Selection::caret(0));
            assert_eq!(out, KeyOutcome::PassThrough);
        }
        let shift_tab = key(KeyCode::Tab).with_mods(Modifiers::SHIFT);
        let out = InputController.handle_key("x", &shift_tab, Selection::caret(0));
        assert_eq!(out, KeyOutcome::PassThrough);

        let shift_enter = key(KeyCode::Enter).with_mods(Modifiers::SHIFT);
        assert!(
            InputController
                .handle_key("", &shift_enter, Selection::caret(0))
                .prevents_default()
        );
    }
}
