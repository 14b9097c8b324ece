#![forbid(unsafe_code)]

//! Error type for the configuration entry points.
//!
//! Editing itself never fails; only string-based selectors and option
//! parsing can be rejected.

use std::fmt;

use codepad_syntax::{UnknownLanguage, UnknownTheme};

/// Errors from configuring an editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// A language option string that is not in the selector list.
    UnknownLanguage(String),
    /// A theme option string that is not in the selector list.
    UnknownTheme(String),
    /// Editor options or an event could not be decoded.
    Options(String),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLanguage(value) => write!(f, "unknown language: {value:?}"),
            Self::UnknownTheme(value) => write!(f, "unknown theme: {value:?}"),
            Self::Options(msg) => write!(f, "invalid editor options: {msg}"),
        }
    }
}

impl std::error::Error for EditorError {}

impl From<UnknownLanguage> for EditorError {
    fn from(err: UnknownLanguage) -> Self {
        Self::UnknownLanguage(err.0)
    }
}

impl From<UnknownTheme> for EditorError {
    fn from(err: UnknownTheme) -> Self {
        Self::UnknownTheme(err.0)
    }
}

impl From<serde_json::Error> for EditorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Options(err.to_string())
    }
}

/// Result alias for editor configuration.
pub type Result<T> = std::result::Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_the_rejected_value() {
        let err = EditorError::UnknownTheme("solarized".into());
        assert_eq!(err.to_string(), "unknown theme: \"solarized\"");
    }

    #[test]
    fn converts_parse_errors() {
        let err: EditorError = "rust".parse::<codepad_syntax::LanguageId>().unwrap_err().into();
        assert_eq!(err, EditorError::UnknownLanguage("rust".into()));
    }
}
