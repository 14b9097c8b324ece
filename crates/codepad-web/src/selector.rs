#![forbid(unsafe_code)]

//! Option lists for the language and theme `<select>` elements.

use codepad_syntax::{LanguageId, ThemeId};

/// Option values for the language selector, in display order.
#[must_use]
pub fn language_options() -> Vec<&'static str> {
    LanguageId::ALL.iter().map(|lang| lang.as_str()).collect()
}

/// Option values for the theme selector, in display order.
#[must_use]
pub fn theme_options() -> Vec<&'static str> {
    ThemeId::ALL.iter().map(|theme| theme.name()).collect()
}
