#![forbid(unsafe_code)]

//! The editable document and UTF-16 offset mapping.

use std::fmt;

/// Number of UTF-16 code units needed to encode `text`.
#[must_use]
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Map a UTF-16 offset to a byte index into `text`.
///
/// Offsets past the end clamp to `text.len()`. An offset that lands between
/// the two halves of a surrogate pair rounds down to the start of that
/// character, so the result is always a char boundary.
#[must_use]
pub fn byte_index(text: &str, offset: usize) -> usize {
    let mut units = 0usize;
    for (idx, ch) in text.char_indices() {
        let next = units + ch.len_utf16();
        if next > offset {
            return idx;
        }
        units = next;
    }
    text.len()
}

/// The full text content of one editor instance.
///
/// The document is replaced wholesale on every edit; there is no incremental
/// patching and no line index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Document {
    text: String,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Borrow the text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Replace the whole content.
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether the document is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length in UTF-16 code units.
    #[must_use]
    pub fn len_utf16(&self) -> usize {
        utf16_len(&self.text)
    }

    /// Number of lines (`'\n'`-separated). An empty document has one line.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Text of line `index` without its newline.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.text.split('\n').nth(index)
    }

    /// Index of the line containing the UTF-16 `offset`.
    #[must_use]
    pub fn line_index_at(&self, offset: usize) -> usize {
        let end = byte_index(&self.text, offset);
        self.text[..end].bytes().filter(|&b| b == b'\n').count()
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf16_len_counts_surrogate_pairs() {
        assert_eq!(utf16_len(""), 0);
        assert_eq!(utf16_len("abc"), 3);
        assert_eq!(utf16_len("é"), 1);
        assert_eq!(utf16_len("😀"), 2);
        assert_eq!(utf16_len("a😀b"), 4);
    }

    #[test]
    fn byte_index_ascii() {
        assert_eq!(byte_index("hello", 0), 0);
        assert_eq!(byte_index("hello", 3), 3);
        assert_eq!(byte_index("hello", 5), 5);
    }

    #[test]
    fn byte_index_clamps_past_end() {
        assert_eq!(byte_index("hi", 10), 2);
        assert_eq!(byte_index("", 1), 0);
    }

    #[test]
    fn byte_index_multibyte() {
        // 'é' is 2 bytes / 1 unit, '😀' is 4 bytes / 2 units.
        let s = "é😀x";
        assert_eq!(byte_index(s, 1), 2);
        assert_eq!(byte_index(s, 3), 6);
        assert_eq!(byte_index(s, 4), 7);
    }

    #[test]
    fn byte_index_inside_surrogate_pair_rounds_down() {
        assert_eq!(byte_index("a😀b", 2), 1);
    }

    #[test]
    fn empty_document_has_one_line() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.line(0), Some(""));
        assert_eq!(doc.line(1), None);
    }

    #[test]
    fn lines_are_derived_on_demand() {
        let doc = Document::from("fn main() {\n    body\n}");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line(1), Some("    body"));
        assert_eq!(doc.line_index_at(0), 0);
        assert_eq!(doc.line_index_at(11), 0);
        assert_eq!(doc.line_index_at(12), 1);
        assert_eq!(doc.line_index_at(100), 2);
    }

    #[test]
    fn trailing_newline_yields_empty_last_line() {
        let doc = Document::from("a\n");
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.line(1), Some(""));
    }

    #[test]
    fn replace_overwrites_everything() {
        let mut doc = Document::from("old");
        doc.replace("new text");
        assert_eq!(doc.as_str(), "new text");
        assert_eq!(doc.len_utf16(), 8);
        assert_eq!(doc.to_string(), "new text");
    }
}
