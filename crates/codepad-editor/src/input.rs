#![forbid(unsafe_code)]

//! Deterministic, JSON-friendly input schema for the editor.
//!
//! The host forwards DOM `keydown`, `input`, `scroll` and `change` events.
//! This module focuses on:
//! - stable key-code normalization (DOM `key`/`code` → [`KeyCode`]),
//! - a compact modifier bitset (`mods: u8`) for logs and traces, and
//! - a JSON encoding of editor events suitable for record/replay.

use bitflags::bitflags;
use codepad_syntax::{LanguageId, ThemeId};
use serde::{Deserialize, Serialize};

use crate::surface::ScrollOffset;

bitflags! {
    /// Modifier keys held during a key event.
    ///
    /// These flags are encoded as a compact `u8` bitset in JSON (`mods`).
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const ALT   = 0b0010;
        const CTRL  = 0b0100;
        const SUPER = 0b1000;
    }
}

impl Modifiers {
    /// Modifiers that turn a key into a shortcut (everything but Shift).
    pub const SHORTCUT: Self = Self::ALT.union(Self::CTRL).union(Self::SUPER);

    /// Build from the DOM `KeyboardEvent` flags.
    #[must_use]
    pub fn from_dom(shift: bool, alt: bool, ctrl: bool, meta: bool) -> Self {
        let mut mods = Self::empty();
        mods.set(Self::SHIFT, shift);
        mods.set(Self::ALT, alt);
        mods.set(Self::CTRL, ctrl);
        mods.set(Self::SUPER, meta);
        mods
    }
}

/// Normalized key code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    BackTab,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    F(u8),
    Unidentified(Box<str>),
}

impl KeyCode {
    #[must_use]
    pub fn to_code_string(&self) -> String {
        match self {
            Self::Char(c) => c.to_string(),
            Self::Enter => "Enter".to_string(),
            Self::Escape => "Escape".to_string(),
            Self::Backspace => "Backspace".to_string(),
            Self::Tab => "Tab".to_string(),
            Self::BackTab => "BackTab".to_string(),
            Self::Delete => "Delete".to_string(),
            Self::Home => "Home".to_string(),
            Self::End => "End".to_string(),
            Self::PageUp => "PageUp".to_string(),
            Self::PageDown => "PageDown".to_string(),
            Self::Up => "Up".to_string(),
            Self::Down => "Down".to_string(),
            Self::Left => "Left".to_string(),
            Self::Right => "Right".to_string(),
            Self::F(n) => format!("F{n}"),
            Self::Unidentified(_) => "Unidentified".to_string(),
        }
    }

    #[must_use]
    pub fn from_code_string(code: &str, raw_key: Option<&str>) -> Self {
        match code {
            "Enter" => Self::Enter,
            "Escape" => Self::Escape,
            "Backspace" => Self::Backspace,
            "Tab" => Self::Tab,
            "BackTab" => Self::BackTab,
            "Delete" => Self::Delete,
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "Up" => Self::Up,
            "Down" => Self::Down,
            "Left" => Self::Left,
            "Right" => Self::Right,
            "Unidentified" => Self::Unidentified(raw_key.unwrap_or_default().into()),
            other => {
                let mut chars = other.chars();
                if let Some(first) = chars.next()
                    && chars.next().is_none()
                {
                    return Self::Char(first);
                }
                if let Some(n) = parse_function_key(other) {
                    return Self::F(n);
                }
                Self::Unidentified(other.into())
            }
        }
    }
}

/// A key press as seen by the input controller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyInput {
    pub code: KeyCode,
    pub mods: Modifiers,
}

impl KeyInput {
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            mods: Modifiers::empty(),
        }
    }

    #[must_use]
    pub const fn with_mods(mut self, mods: Modifiers) -> Self {
        self.mods = mods;
        self
    }

    /// Whether Ctrl, Alt or Meta is held.
    #[must_use]
    pub const fn is_shortcut(&self) -> bool {
        self.mods.intersects(Modifiers::SHORTCUT)
    }
}

/// Deterministic normalization of DOM key/code strings into a [`KeyCode`].
#[must_use]
pub fn normalize_dom_key(dom_key: &str, dom_code: &str, mods: Modifiers) -> KeyCode {
    // Shift+Tab should be represented explicitly.
    if dom_key == "Tab" && mods.contains(Modifiers::SHIFT) {
        return KeyCode::BackTab;
    }

    // Prefer the logical `key` for printable characters (already includes shift).
    let mut chars = dom_key.chars();
    if let Some(first) = chars.next()
        && chars.next().is_none()
    {
        return KeyCode::Char(first);
    }

    match dom_key {
        "Enter" => KeyCode::Enter,
        "Escape" | "Esc" => KeyCode::Escape,
        "Backspace" => KeyCode::Backspace,
        "Tab" => KeyCode::Tab,
        "Delete" | "Del" => KeyCode::Delete,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,
        "ArrowUp" | "Up" => KeyCode::Up,
        "ArrowDown" | "Down" => KeyCode::Down,
        "ArrowLeft" | "Left" => KeyCode::Left,
        "ArrowRight" | "Right" => KeyCode::Right,
        "Spacebar" => KeyCode::Char(' '),
        _ => {
            if let Some(n) = parse_function_key(dom_key) {
                return KeyCode::F(n);
            }
            // Fallback to DOM `code` for keys some wrappers leave unnamed.
            match dom_code {
                "Enter" | "NumpadEnter" => KeyCode::Enter,
                "Backspace" => KeyCode::Backspace,
                "Tab" if mods.contains(Modifiers::SHIFT) => KeyCode::BackTab,
                "Tab" => KeyCode::Tab,
                _ => KeyCode::Unidentified(dom_key.into()),
            }
        }
    }
}

fn parse_function_key(s: &str) -> Option<u8> {
    let rest = s.strip_prefix('F')?;
    rest.parse::<u8>().ok().filter(|n| (1..=24).contains(n))
}

// ====================================================================
// Editor events
// ====================================================================

/// Everything a host can feed into an editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// `keydown` on the input surface.
    Key(KeyInput),
    /// `input`: the surface value changed natively.
    Change(String),
    /// `scroll` on the input surface.
    Scroll(ScrollOffset),
    /// Language selector changed.
    Language(LanguageId),
    /// Theme selector changed.
    Theme(ThemeId),
}

/// JSON encoding of [`EditorEvent`] for host bridges and golden traces.
///
/// A `kind` tag plus the minimum semantic fields needed for replay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditorEventJson {
    Key {
        code: String,
        mods: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        raw_key: Option<String>,
    },
    Change {
        value: String,
    },
    Scroll {
        top: i32,
        left: i32,
    },
    Language {
        language: LanguageId,
    },
    Theme {
        theme: ThemeId,
    },
}

impl EditorEvent {
    /// Encode this event as a stable JSON string.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&EditorEventJson::from(self))
    }

    /// Decode a previously encoded event JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        let json: EditorEventJson = serde_json::from_str(s)?;
        Ok(Self::from(json))
    }
}

impl From<&EditorEvent> for EditorEventJson {
    fn from(value: &EditorEvent) -> Self {
        match value {
            EditorEvent::Key(key) => {
                let raw_key = match &key.code {
                    KeyCode::Unidentified(raw) => Some(raw.to_string()),
                    _ => None,
                };
                Self::Key {
                    code: key.code.to_code_string(),
                    mods: key.mods.bits(),
                    raw_key,
                }
            }
            EditorEvent::Change(value) => Self::Change {
                value: value.clone(),
            },
            EditorEvent::Scroll(offset) => Self::Scroll {
                top: offset.top,
                left: offset.left,
            },
            EditorEvent::Language(language) => Self::Language {
                language: *language,
            },
            EditorEvent::Theme(theme) => Self::Theme { theme: *theme },
        }
    }
}

impl From<EditorEventJson> for EditorEvent {
    fn from(value: EditorEventJson) -> Self {
        match value {
            EditorEventJson::Key {
                code,
                mods,
                raw_key,
            } => Self::Key(KeyInput {
                code: KeyCode::from_code_string(&code, raw_key.as_deref()),
                mods: Modifiers::from_bits_truncate(mods),
            }),
            EditorEventJson::Change { value } => Self::Change(value),
            EditorEventJson::Scroll { top, left } => Self::Scroll(ScrollOffset { top, left }),
            EditorEventJson::Language { language } => Self::Language(language),
            EditorEventJson::Theme { theme } => Self::Theme(theme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn map_dom_key_specials() {
        let mods = Modifiers::empty();
        assert_eq!(normalize_dom_key("Enter", "Enter", mods), KeyCode::Enter);
        assert_eq!(normalize_dom_key("ArrowLeft", "ArrowLeft", mods), KeyCode::Left);
        assert_eq!(normalize_dom_key("Backspace", "Backspace", mods), KeyCode::Backspace);
        assert_eq!(normalize_dom_key("F12", "F12", mods), KeyCode::F(12));
        assert_eq!(normalize_dom_key("a", "KeyA", mods), KeyCode::Char('a'));
    }

    #[test]
    fn shift_tab_is_backtab() {
        let mods = Modifiers::SHIFT;
        assert_eq!(normalize_dom_key("Tab", "Tab", mods), KeyCode::BackTab);
        assert_eq!(normalize_dom_key("Unidentified", "Tab", mods), KeyCode::BackTab);
    }

    #[test]
    fn unknown_keys_keep_the_raw_name() {
        let code = normalize_dom_key("AudioVolumeUp", "AudioVolumeUp", Modifiers::empty());
        assert_eq!(code, KeyCode::Unidentified("AudioVolumeUp".into()));
    }

    #[test]
    fn dom_modifier_flags() {
        let mods = Modifiers::from_dom(true, false, true, false);
        assert_eq!(mods, Modifiers::SHIFT | Modifiers::CTRL);
        assert!(KeyInput::new(KeyCode::Tab).with_mods(mods).is_shortcut());
        assert!(!KeyInput::new(KeyCode::Tab).with_mods(Modifiers::SHIFT).is_shortcut());
    }

    #[test]
    fn event_json_shape_is_stable() {
        let ev = EditorEvent::Key(KeyInput::new(KeyCode::Tab).with_mods(Modifiers::SHIFT));
        assert_eq!(
            ev.to_json_string().expect("serialize"),
            r#"{"kind":"key","code":"Tab","mods":1}"#
        );
        let ev = EditorEvent::Theme(ThemeId::NightOwl);
        assert_eq!(
            ev.to_json_string().expect("serialize"),
            r#"{"kind":"theme","theme":"nightOwl"}"#
        );
        let ev = EditorEvent::Language(LanguageId::JavaScript);
        assert_eq!(
            ev.to_json_string().expect("serialize"),
            r#"{"kind":"language","language":"javascript"}"#
        );
    }

    #[test]
    fn unknown_theme_in_json_is_rejected() {
        assert!(EditorEvent::from_json_str(r#"{"kind":"theme","theme":"dracula"}"#).is_err());
    }

    #[test]
    fn unidentified_key_roundtrips_raw_name() {
        let ev = EditorEvent::Key(KeyInput::new(KeyCode::Unidentified("Dead".into())));
        let json = ev.to_json_string().expect("serialize");
        assert_eq!(EditorEvent::from_json_str(&json).expect("deserialize"), ev);
    }

    proptest! {
        #[test]
        fn printable_keys_map_to_chars(c in any::<char>(), bits in 0u8..16) {
            let mods = Modifiers::from_bits_truncate(bits);
            prop_assert_eq!(normalize_dom_key(&c.to_string(), "", mods), KeyCode::Char(c));
        }

        #[test]
        fn change_events_survive_json(value in ".{0,40}") {
            let ev = EditorEvent::Change(value);
            let json = ev.to_json_string().expect("serialize");
            prop_assert_eq!(EditorEvent::from_json_str(&json).expect("deserialize"), ev);
        }
    }
}
