#![forbid(unsafe_code)]

//! Editor options and selector values.

use codepad_syntax::{LanguageId, ThemeId};
use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};

/// Options applied when an editor is mounted.
///
/// Deserializes from the camelCase JSON a host passes in; every field is
/// optional.
///
/// ```
/// use codepad_editor::EditorOptions;
/// use codepad_syntax::{LanguageId, ThemeId};
///
/// let opts = EditorOptions::from_json(r#"{"language":"json","theme":"okaidia"}"#).unwrap();
/// assert_eq!(opts.language, LanguageId::Json);
/// assert_eq!(opts.theme, ThemeId::Okaidia);
/// assert!(opts.autofocus);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct EditorOptions {
    pub language: LanguageId,
    pub theme: ThemeId,
    /// Document shown on mount.
    pub initial_text: String,
    /// Focus the input surface on mount.
    pub autofocus: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            language: LanguageId::default(),
            theme: ThemeId::default(),
            initial_text: String::new(),
            autofocus: true,
        }
    }
}

impl EditorOptions {
    /// Parse options from JSON. An empty string yields the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_language(mut self, language: LanguageId) -> Self {
        self.language = language;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ThemeId) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.initial_text = text.into();
        self
    }

    #[must_use]
    pub fn with_autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = autofocus;
        self
    }
}

/// A language selector value: the enum itself or its option string.
pub trait LanguageOption {
    fn resolve(self) -> Result<LanguageId>;
}

impl LanguageOption for LanguageId {
    fn resolve(self) -> Result<LanguageId> {
        Ok(self)
    }
}

impl LanguageOption for &str {
    fn resolve(self) -> Result<LanguageId> {
        self.parse().map_err(EditorError::from)
    }
}

impl LanguageOption for &String {
    fn resolve(self) -> Result<LanguageId> {
        LanguageOption::resolve(self.as_str())
    }
}

/// A theme selector value: the enum itself or its option string.
pub trait ThemeOption {
    fn resolve(self) -> Result<ThemeId>;
}

impl ThemeOption for ThemeId {
    fn resolve(self) -> Result<ThemeId> {
        Ok(self)
    }
}

impl ThemeOption for &str {
    fn resolve(self) -> Result<ThemeId> {
        self.parse().map_err(EditorError::from)
    }
}

impl ThemeOption for &String {
    fn resolve(self) -> Result<ThemeId> {
        ThemeOption::resolve(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_options() {
        let opts = EditorOptions::default();
        assert_eq!(opts.language, LanguageId::Jsx);
        assert_eq!(opts.theme, ThemeId::VsDark);
        assert_eq!(opts.initial_text, "");
        assert!(opts.autofocus);
        assert_eq!(EditorOptions::from_json("  ").unwrap(), opts);
        assert_eq!(EditorOptions::from_json("{}").unwrap(), opts);
    }

    #[test]
    fn parses_camel_case_fields() {
        let opts =
            EditorOptions::from_json(r#"{"initialText":"a\nb","autofocus":false,"language":"css"}"#)
                .unwrap();
        assert_eq!(opts.initial_text, "a\nb");
        assert!(!opts.autofocus);
        assert_eq!(opts.language, LanguageId::Css);
    }

    #[test]
    fn rejects_unknown_values() {
        let err = EditorOptions::from_json(r#"{"theme":"dracula"}"#).unwrap_err();
        assert!(matches!(err, EditorError::Options(_)));
        let err = EditorOptions::from_json(r#"{"fontSize":12}"#).unwrap_err();
        assert!(matches!(err, EditorError::Options(_)));
    }

    #[test]
    fn option_strings_resolve_exactly() {
        assert_eq!(LanguageOption::resolve("tsx"), Ok(LanguageId::Tsx));
        assert_eq!(
            LanguageOption::resolve("TSX"),
            Err(EditorError::UnknownLanguage("TSX".into()))
        );
        assert_eq!(ThemeOption::resolve("duotoneLight"), Ok(ThemeId::DuotoneLight));
        assert_eq!(
            ThemeOption::resolve(&"x".to_string()),
            Err(EditorError::UnknownTheme("x".into()))
        );
        assert_eq!(ThemeOption::resolve(ThemeId::Okaidia), Ok(ThemeId::Okaidia));
    }
}
