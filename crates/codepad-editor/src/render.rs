#![forbid(unsafe_code)]

//! Markup for the highlight overlay.

use codepad_syntax::HighlightedCode;

/// Escape text for HTML element content and attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Inline style for the `<pre>` box: theme background and plain color.
#[must_use]
pub fn pre_style(code: &HighlightedCode) -> String {
    format!(
        "background-color:{};color:{};",
        code.background, code.foreground
    )
}

/// Render token lines as overlay markup.
///
/// One `<div class="token-line">` per line, each token a
/// `<span class="token {kind}">` with its inline color. An empty line holds
/// a lone `\n` so it keeps its height inside the `<pre>`.
#[must_use]
pub fn render_html(code: &HighlightedCode) -> String {
    let mut out = String::new();
    for line in &code.lines {
        out.push_str("<div class=\"token-line\">");
        if line.is_empty() {
            out.push_str("<span class=\"token plain\">\n</span>");
        }
        for token in line {
            out.push_str("<span class=\"token ");
            out.push_str(token.kind.class_name());
            out.push('"');
            let css = token.style.to_css();
            if !css.is_empty() {
                out.push_str(" style=\"");
                out.push_str(&css);
                out.push('"');
            }
            out.push('>');
            out.push_str(&escape_html(&token.text));
            out.push_str("</span>");
        }
        out.push_str("</div>");
    }
    out
}
