#![forbid(unsafe_code)]

//! Styled token lines: the output of highlighting a document.

use crate::language::LanguageId;
use crate::style::{Rgb, Style};
use crate::theme::{HighlightTheme, ThemeId, palette};
use crate::token::{Token, TokenKind};

/// A fragment of one line with its kind and resolved style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledToken {
    pub text: String,
    pub kind: TokenKind,
    pub style: Style,
}

impl StyledToken {
    pub fn new(text: impl Into<String>, kind: TokenKind, style: Style) -> Self {
        Self {
            text: text.into(),
            kind,
            style,
        }
    }
}

/// Highlighted document: one token list per `'\n'`-separated line.
///
/// Concatenating the token texts of line `i` yields line `i` of the source,
/// so `lines.len()` always equals `code.split('\n').count()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedCode {
    pub lines: Vec<Vec<StyledToken>>,
    pub language: LanguageId,
    pub theme: ThemeId,
    /// Overlay background of the theme.
    pub background: Rgb,
    /// Plain text color of the theme.
    pub foreground: Rgb,
}

impl HighlightedCode {
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Source text of line `idx`, or `None` past the last line.
    #[must_use]
    pub fn line_text(&self, idx: usize) -> Option<String> {
        self.lines
            .get(idx)
            .map(|line| line.iter().map(|t| t.text.as_str()).collect())
    }

    /// Reassemble the highlighted source.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            for token in line {
                out.push_str(&token.text);
            }
        }
        out
    }
}

/// Highlight capability consumed by the editor.
///
/// Any `Fn(&str, LanguageId, ThemeId) -> HighlightedCode` closure is a
/// highlighter, which lets tests count or replace renders.
pub trait Highlighter {
    fn highlight(&self, code: &str, language: LanguageId, theme: ThemeId) -> HighlightedCode;
}

impl<F> Highlighter for F
where
    F: Fn(&str, LanguageId, ThemeId) -> HighlightedCode,
{
    fn highlight(&self, code: &str, language: LanguageId, theme: ThemeId) -> HighlightedCode {
        self(code, language, theme)
    }
}

/// The built-in tokenizers and themes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxHighlighter;

impl Highlighter for SyntaxHighlighter {
    fn highlight(&self, code: &str, language: LanguageId, theme: ThemeId) -> HighlightedCode {
        highlight(code, language, theme)
    }
}

/// Highlight `code` as `language` with `theme`. Pure.
#[must_use]
pub fn highlight(code: &str, language: LanguageId, theme: ThemeId) -> HighlightedCode {
    let styles = palette(theme);
    let lines = language
        .tokenizer()
        .tokenize_lines(code)
        .into_iter()
        .map(|(line, tokens)| styled_line(line, &tokens, styles))
        .collect();
    HighlightedCode {
        lines,
        language,
        theme,
        background: styles.background,
        foreground: styles.foreground,
    }
}

fn styled_line(source: &str, tokens: &[Token], styles: &HighlightTheme) -> Vec<StyledToken> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut last_end = 0;

    for token in tokens {
        // Fill gaps between tokens with unstyled text
        if token.range.start > last_end
            && let Some(gap) = source.get(last_end..token.range.start)
        {
            out.push(StyledToken::new(gap, TokenKind::Text, Style::new()));
        }

        if !token.is_empty()
            && let Some(text) = source.get(token.range.clone())
        {
            out.push(StyledToken::new(text, token.kind, styles.style_for(token.kind)));
        }
        last_end = last_end.max(token.range.end);
    }

    // Trailing text after last token
    if last_end < source.len()
        && let Some(tail) = source.get(last_end..)
    {
        out.push(StyledToken::new(tail, TokenKind::Text, Style::new()));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_source_line() {
        let code = highlight("{\n  \"a\": 1\n}\n", LanguageId::Json, ThemeId::VsDark);
        assert_eq!(code.line_count(), 4);
        assert!(code.lines[3].is_empty());
        assert_eq!(code.line_text(1).as_deref(), Some("  \"a\": 1"));
        assert_eq!(code.line_text(4), None);
    }

    #[test]
    fn empty_document_is_one_empty_line() {
        let code = highlight("", LanguageId::Jsx, ThemeId::VsDark);
        assert_eq!(code.lines, vec![Vec::new()]);
        assert_eq!(code.to_plain_text(), "");
    }

    #[test]
    fn tokens_carry_theme_styles() {
        let code = highlight("// hi", LanguageId::JavaScript, ThemeId::NightOwl);
        let token = &code.lines[0][0];
        assert_eq!(token.kind, TokenKind::Comment);
        assert_eq!(token.style, palette(ThemeId::NightOwl).comment);
        assert_eq!(code.background, palette(ThemeId::NightOwl).background);
    }

    #[test]
    fn same_text_differs_only_in_style_across_themes() {
        let src = r#"{"k": [true, 2]}"#;
        let a = highlight(src, LanguageId::Json, ThemeId::VsDark);
        let b = highlight(src, LanguageId::Json, ThemeId::NightOwl);
        assert_eq!(a.to_plain_text(), b.to_plain_text());
        let kinds = |c: &HighlightedCode| -> Vec<TokenKind> {
            c.lines[0].iter().map(|t| t.kind).collect()
        };
        assert_eq!(kinds(&a), kinds(&b));
        assert_ne!(a.lines, b.lines);
    }

    #[test]
    fn closures_are_highlighters() {
        let fixed = |code: &str, language: LanguageId, theme: ThemeId| HighlightedCode {
            lines: vec![vec![StyledToken::new(code, TokenKind::Text, Style::new())]],
            language,
            theme,
            background: Rgb::new(0, 0, 0),
            foreground: Rgb::new(255, 255, 255),
        };
        let out = Highlighter::highlight(&fixed, "x\ny", LanguageId::Css, ThemeId::Okaidia);
        assert_eq!(out.lines.len(), 1);
        assert_eq!(out.theme, ThemeId::Okaidia);
    }

    #[test]
    fn syntax_highlighter_delegates() {
        let out = SyntaxHighlighter.highlight("a", LanguageId::Html, ThemeId::VsDark);
        assert_eq!(out, highlight("a", LanguageId::Html, ThemeId::VsDark));
    }
}
