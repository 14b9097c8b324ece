#![forbid(unsafe_code)]

//! Token model shared by all tokenizers.

use std::ops::Range;

// ---------------------------------------------------------------------------
// Token kinds
// ---------------------------------------------------------------------------

/// Semantic token categories for syntax highlighting.
///
/// Sub-categories (e.g., `KeywordControl` vs `Keyword`) allow themes to assign
/// different styles to different semantic roles while keeping a flat enum.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Keyword,
    KeywordControl,
    KeywordType,

    // Literals
    String,
    Number,
    Boolean,
    Constant,

    // Identifiers
    Identifier,
    Type,
    Function,
    Property,

    // Comments
    Comment,
    CommentBlock,

    // Operators and punctuation
    Operator,
    Punctuation,
    Delimiter,

    // Markup and stylesheets
    Tag,
    AttrName,
    AttrValue,
    Entity,
    Selector,
    AtRule,

    // Special
    Attribute,

    // Whitespace and errors
    Whitespace,
    Error,

    // Default / plain text
    Text,
}

impl TokenKind {
    /// Class name used on the rendered `<span>`.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Keyword | Self::KeywordControl => "keyword",
            Self::KeywordType => "builtin",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Constant => "constant",
            Self::Identifier => "variable",
            Self::Type => "class-name",
            Self::Function => "function",
            Self::Property => "property",
            Self::Comment | Self::CommentBlock => "comment",
            Self::Operator => "operator",
            Self::Punctuation | Self::Delimiter => "punctuation",
            Self::Tag => "tag",
            Self::AttrName => "attr-name",
            Self::AttrValue => "attr-value",
            Self::Entity => "entity",
            Self::Selector => "selector",
            Self::AtRule => "atrule",
            Self::Attribute => "attribute",
            Self::Whitespace | Self::Text => "plain",
            Self::Error => "error",
        }
    }
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A token with a kind and byte range in the tokenized line.
///
/// Tokens must satisfy `range.start <= range.end <= line.len()`, and both
/// ends must fall on char boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub range: Range<usize>,
}

impl Token {
    /// Create a token. Panics in debug builds if the range is inverted.
    pub fn new(kind: TokenKind, range: Range<usize>) -> Self {
        debug_assert!(range.start <= range.end, "token range must be ordered");
        Self { kind, range }
    }

    /// Token length in bytes.
    pub fn len(&self) -> usize {
        self.range.end.saturating_sub(self.range.start)
    }

    /// Whether the token is empty.
    pub fn is_empty(&self) -> bool {
        self.range.start >= self.range.end
    }

    /// Extract the token's text from a source string.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range.clone()]
    }
}

// ---------------------------------------------------------------------------
// Line state
// ---------------------------------------------------------------------------

/// Lexical state carried across lines for multi-line constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineState {
    /// Normal code context.
    #[default]
    Normal,
    /// Inside a string literal.
    InString(StringKind),
    /// Inside a block comment.
    InComment,
    /// Inside an HTML tag, between its name and the closing `>`.
    InTag,
}

/// String literal variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKind {
    Double,
    Single,
    Backtick,
}

impl StringKind {
    /// Quote byte that opens and closes this kind of string.
    pub const fn quote(self) -> u8 {
        match self {
            Self::Double => b'"',
            Self::Single => b'\'',
            Self::Backtick => b'`',
        }
    }

    /// Kind for an opening quote byte.
    pub const fn from_quote(quote: u8) -> Option<Self> {
        match quote {
            b'"' => Some(Self::Double),
            b'\'' => Some(Self::Single),
            b'`' => Some(Self::Backtick),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that all token ranges are in-bounds, on char boundaries and
/// non-overlapping.
pub fn validate_tokens(source: &str, tokens: &[Token]) -> bool {
    let len = source.len();
    let mut prev_end = 0;
    for token in tokens {
        if token.range.start > token.range.end {
            return false;
        }
        if token.range.end > len {
            return false;
        }
        if token.range.start < prev_end {
            return false; // overlapping
        }
        if !source.is_char_boundary(token.range.start) || !source.is_char_boundary(token.range.end)
        {
            return false;
        }
        prev_end = token.range.end;
    }
    true
}
