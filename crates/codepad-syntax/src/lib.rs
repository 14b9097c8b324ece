#![forbid(unsafe_code)]

//! Syntax highlighting for the Codepad editor.
//!
//! [`highlight`] maps `(code, language, theme)` to [`HighlightedCode`]: one
//! list of [`StyledToken`]s per source line. The editor only depends on the
//! [`Highlighter`] trait; [`SyntaxHighlighter`] wires it to the built-in
//! tokenizers and themes.
//!
//! # Example
//! ```
//! use codepad_syntax::{LanguageId, ThemeId, TokenKind, highlight};
//!
//! let code = highlight("const x = 1;", LanguageId::JavaScript, ThemeId::NightOwl);
//! assert_eq!(code.lines.len(), 1);
//! assert_eq!(code.lines[0][0].kind, TokenKind::Keyword);
//! assert_eq!(code.to_plain_text(), "const x = 1;");
//! ```

pub mod highlight;
pub mod language;
pub mod style;
pub mod theme;
pub mod token;
pub mod tokenizer;

pub use highlight::{HighlightedCode, Highlighter, StyledToken, SyntaxHighlighter, highlight};
pub use language::{LanguageId, UnknownLanguage};
pub use style::{Rgb, Style};
pub use theme::{HighlightTheme, ThemeId, UnknownTheme, palette};
pub use token::{LineState, Token, TokenKind};
pub use tokenizer::Tokenizer;
