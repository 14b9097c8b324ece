#![forbid(unsafe_code)]

//! Line-oriented tokenizers.
//!
//! Every tokenizer works one line at a time and threads a [`LineState`]
//! between lines for constructs that span newlines (block comments,
//! template strings, multi-line HTML tags). Token ranges are byte offsets
//! within the line and never split a UTF-8 character.

use crate::token::{LineState, StringKind, Token, TokenKind};

// ---------------------------------------------------------------------------
// Tokenizer trait
// ---------------------------------------------------------------------------

/// Core tokenizer abstraction.
///
/// Implementors produce tokens for a single line given the state from the
/// previous line.
pub trait Tokenizer: Send + Sync {
    /// Human-readable name (e.g., "JavaScript", "CSS").
    fn name(&self) -> &'static str;

    /// Tokenize a single line. Returns `(tokens, state_after)`.
    ///
    /// `line` never contains `'\n'`. Token ranges are byte offsets within
    /// `line`.
    fn tokenize_line(&self, line: &str, state: LineState) -> (Vec<Token>, LineState);

    /// Tokenize every `'\n'`-separated line of `text`, threading state.
    ///
    /// Always yields one entry per line, so an empty text yields a single
    /// empty line.
    fn tokenize_lines<'a>(&self, text: &'a str) -> Vec<(&'a str, Vec<Token>)> {
        let mut state = LineState::Normal;
        text.split('\n')
            .map(|line| {
                let (tokens, next) = self.tokenize_line(line, state);
                state = next;
                (line, tokens)
            })
            .collect()
    }
}

/// Byte length of the char starting at `pos`.
fn char_len_at(line: &str, pos: usize) -> usize {
    line[pos..].chars().next().map_or(1, char::len_utf8)
}

/// Scan a quoted run starting at the opening quote. Returns `(end, closed)`.
fn scan_quoted(bytes: &[u8], pos: usize, quote: u8) -> (usize, bool) {
    let mut end = pos + 1;
    while end < bytes.len() {
        if bytes[end] == b'\\' {
            // Skip escaped character, but don't go past end of line
            end = (end + 2).min(bytes.len());
        } else if bytes[end] == quote {
            return (end + 1, true);
        } else {
            end += 1;
        }
    }
    (end, false)
}

/// Skip ASCII spaces and tabs from `pos`.
fn skip_blanks(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && (bytes[pos] == b' ' || bytes[pos] == b'\t') {
        pos += 1;
    }
    pos
}

fn is_operator_byte(b: u8) -> bool {
    matches!(
        b,
        b'+' | b'-' | b'*' | b'/' | b'%' | b'=' | b'!' | b'<' | b'>' | b'&' | b'|' | b'^' | b'~'
            | b'?'
    )
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

// ---------------------------------------------------------------------------
// GenericTokenizer
// ---------------------------------------------------------------------------

/// Configuration for a [`GenericTokenizer`].
pub struct GenericTokenizerConfig {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub control_keywords: &'static [&'static str],
    pub type_keywords: &'static [&'static str],
    pub line_comment: &'static str,
    pub block_comment_start: &'static str,
    pub block_comment_end: &'static str,
    /// Backtick strings that may span lines.
    pub template_strings: bool,
    /// Recognize JSX-style `<Tag attr="v">` markup.
    pub markup_tags: bool,
}

/// A configurable tokenizer for C-family languages.
///
/// Handles the most common lexical patterns:
/// - Line comments (`//`) and block comments (`/* */`)
/// - Double, single and (optionally) backtick strings with escapes
/// - Decimal and hex numbers
/// - Configurable keyword sets, plus call-site function detection
/// - Optional JSX tags with attribute names and values
pub struct GenericTokenizer {
    config: GenericTokenizerConfig,
}

/// Scanner position inside JSX markup.
#[derive(Debug, Clone, Copy, Default)]
struct TagScan {
    in_tag: bool,
    /// Depth of `{ ... }` expressions nested in the current tag.
    braces: usize,
}

impl TagScan {
    fn markup(self) -> bool {
        self.in_tag && self.braces == 0
    }
}

impl GenericTokenizer {
    /// Create a generic tokenizer with the given configuration.
    pub const fn new(config: GenericTokenizerConfig) -> Self {
        Self { config }
    }

    /// Scan a word (identifier or keyword) starting at `pos`.
    fn scan_word(&self, bytes: &[u8], pos: usize) -> (TokenKind, usize) {
        let start = pos;
        let mut end = pos;
        while end < bytes.len() && is_ident_byte(bytes[end]) {
            end += 1;
        }
        let word = std::str::from_utf8(&bytes[start..end]).unwrap_or("");
        let kind = if self.config.keywords.contains(&word) {
            TokenKind::Keyword
        } else if self.config.control_keywords.contains(&word) {
            TokenKind::KeywordControl
        } else if self.config.type_keywords.contains(&word) {
            TokenKind::KeywordType
        } else if word == "true" || word == "false" {
            TokenKind::Boolean
        } else if bytes.get(skip_blanks(bytes, end)) == Some(&b'(') {
            TokenKind::Function
        } else if word.chars().next().is_some_and(|c| c.is_uppercase()) {
            TokenKind::Type
        } else {
            TokenKind::Identifier
        };
        (kind, end)
    }

    /// Scan a number starting at `pos`.
    fn scan_number(&self, bytes: &[u8], pos: usize) -> usize {
        let mut end = pos;
        // Hex prefix
        if end + 1 < bytes.len() && bytes[end] == b'0' && (bytes[end + 1] | 0x20) == b'x' {
            end += 2;
            while end < bytes.len() && bytes[end].is_ascii_hexdigit() {
                end += 1;
            }
            return end;
        }
        // Decimal (with optional dot and exponent)
        while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'_') {
            end += 1;
        }
        if end < bytes.len()
            && bytes[end] == b'.'
            && end + 1 < bytes.len()
            && bytes[end + 1].is_ascii_digit()
        {
            end += 1;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
        }
        // Exponent or suffix (e.g., 1e9, 10n)
        if end < bytes.len() && bytes[end].is_ascii_alphabetic() {
            while end < bytes.len() && bytes[end].is_ascii_alphanumeric() {
                end += 1;
            }
        }
        end
    }

    /// Whether a `<` at `pos` opens a JSX tag rather than a comparison.
    fn opens_tag(&self, line: &str, pos: usize, base_offset: usize, tokens: &[Token]) -> bool {
        let bytes = line.as_bytes();
        match bytes.get(pos + 1).copied() {
            // Closing tags may follow child text.
            Some(b'/') => {
                return bytes
                    .get(pos + 2)
                    .is_some_and(|b| b.is_ascii_alphabetic() || *b == b'>');
            }
            Some(b'>') => {}
            Some(b) if b.is_ascii_alphabetic() => {}
            _ => return false,
        }
        // `a<b` and `f()<x` are comparisons.
        let prev = tokens
            .iter()
            .rev()
            .find(|t| t.kind != TokenKind::Whitespace);
        match prev {
            None => true,
            Some(token) => match token.kind {
                TokenKind::Identifier
                | TokenKind::Number
                | TokenKind::Type
                | TokenKind::Constant
                | TokenKind::String => false,
                TokenKind::Delimiter => {
                    let b = bytes[token.range.start - base_offset];
                    !matches!(b, b')' | b']')
                }
                _ => true,
            },
        }
    }

    /// Continue scanning a block comment.
    fn continue_block_comment(&self, line: &str) -> (Vec<Token>, LineState) {
        let end_pat = self.config.block_comment_end;
        if let Some(end_pos) = line.find(end_pat) {
            let comment_end = end_pos + end_pat.len();
            let mut tokens = vec![Token::new(TokenKind::CommentBlock, 0..comment_end)];
            // Tokenize the rest of the line normally.
            let rest = &line[comment_end..];
            let (rest_tokens, rest_state) =
                self.tokenize_normal(rest, comment_end, TagScan::default());
            tokens.extend(rest_tokens);
            (tokens, rest_state)
        } else {
            // Whole line is still inside the block comment.
            (
                vec![Token::new(TokenKind::CommentBlock, 0..line.len())],
                LineState::InComment,
            )
        }
    }

    /// Continue scanning an unclosed string.
    fn continue_string(&self, line: &str, kind: StringKind) -> (Vec<Token>, LineState) {
        let quote = kind.quote();
        let bytes = line.as_bytes();
        let mut end = 0;
        while end < bytes.len() {
            if bytes[end] == b'\\' {
                end = (end + 2).min(bytes.len());
            } else if bytes[end] == quote {
                let mut all = vec![Token::new(TokenKind::String, 0..end + 1)];
                let rest = &line[end + 1..];
                let (mut rest_tokens, rest_state) =
                    self.tokenize_normal(rest, end + 1, TagScan::default());
                all.append(&mut rest_tokens);
                return (all, rest_state);
            } else {
                end += 1;
            }
        }
        (
            vec![Token::new(TokenKind::String, 0..line.len())],
            LineState::InString(kind),
        )
    }

    /// Tokenize a line in normal (non-continuation) context.
    fn tokenize_normal(
        &self,
        line: &str,
        base_offset: usize,
        mut tag: TagScan,
    ) -> (Vec<Token>, LineState) {
        let bytes = line.as_bytes();
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < bytes.len() {
            let ch = bytes[pos];

            // Whitespace run
            if ch.is_ascii_whitespace() {
                let start = pos;
                while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
                    pos += 1;
                }
                tokens.push(Token::new(
                    TokenKind::Whitespace,
                    base_offset + start..base_offset + pos,
                ));
                continue;
            }

            if tag.markup() {
                // Tag close
                if ch == b'>' || (ch == b'/' && bytes.get(pos + 1) == Some(&b'>')) {
                    let len = if ch == b'>' { 1 } else { 2 };
                    tokens.push(Token::new(
                        TokenKind::Tag,
                        base_offset + pos..base_offset + pos + len,
                    ));
                    pos += len;
                    tag.in_tag = false;
                    continue;
                }
                // Attribute value
                if ch == b'"' || ch == b'\'' {
                    let (end, _) = scan_quoted(bytes, pos, ch);
                    tokens.push(Token::new(
                        TokenKind::AttrValue,
                        base_offset + pos..base_offset + end,
                    ));
                    pos = end;
                    continue;
                }
                // Attribute name
                if is_ident_start(ch) {
                    let start = pos;
                    while pos < bytes.len() && (is_ident_byte(bytes[pos]) || bytes[pos] == b'-') {
                        pos += 1;
                    }
                    tokens.push(Token::new(
                        TokenKind::AttrName,
                        base_offset + start..base_offset + pos,
                    ));
                    continue;
                }
            }

            // Line comment
            if !self.config.line_comment.is_empty()
                && line[pos..].starts_with(self.config.line_comment)
            {
                tokens.push(Token::new(
                    TokenKind::Comment,
                    base_offset + pos..base_offset + bytes.len(),
                ));
                return (tokens, LineState::Normal);
            }

            // Block comment start
            if !self.config.block_comment_start.is_empty()
                && line[pos..].starts_with(self.config.block_comment_start)
            {
                let start = pos;
                let after_open = pos + self.config.block_comment_start.len();
                let rest = &line[after_open..];
                if let Some(end_pos) = rest.find(self.config.block_comment_end) {
                    let comment_end = after_open + end_pos + self.config.block_comment_end.len();
                    tokens.push(Token::new(
                        TokenKind::CommentBlock,
                        base_offset + start..base_offset + comment_end,
                    ));
                    pos = comment_end;
                } else {
                    tokens.push(Token::new(
                        TokenKind::CommentBlock,
                        base_offset + start..base_offset + bytes.len(),
                    ));
                    return (tokens, LineState::InComment);
                }
                continue;
            }

            // String literals
            let string_kind = match ch {
                b'`' if !self.config.template_strings => None,
                _ => StringKind::from_quote(ch),
            };
            if let Some(kind) = string_kind {
                let start = pos;
                let (end, closed) = scan_quoted(bytes, pos, ch);
                tokens.push(Token::new(
                    TokenKind::String,
                    base_offset + start..base_offset + end,
                ));
                if !closed {
                    return (tokens, LineState::InString(kind));
                }
                pos = end;
                continue;
            }

            // JSX tag open
            if self.config.markup_tags
                && !tag.in_tag
                && ch == b'<'
                && self.opens_tag(line, pos, base_offset, &tokens)
            {
                let start = pos;
                pos += 1;
                if bytes.get(pos) == Some(&b'/') {
                    pos += 1;
                }
                while pos < bytes.len()
                    && (is_ident_byte(bytes[pos]) || matches!(bytes[pos], b'.' | b'-' | b':'))
                {
                    pos += 1;
                }
                // Fragments (`<>` / `</>`) close immediately.
                let name_start = start + 1 + usize::from(bytes[start + 1] == b'/');
                if pos == name_start && bytes.get(pos) == Some(&b'>') {
                    pos += 1;
                } else {
                    tag = TagScan {
                        in_tag: true,
                        braces: 0,
                    };
                }
                tokens.push(Token::new(
                    TokenKind::Tag,
                    base_offset + start..base_offset + pos,
                ));
                continue;
            }

            // Numbers
            if ch.is_ascii_digit() {
                let start = pos;
                let end = self.scan_number(bytes, pos);
                tokens.push(Token::new(
                    TokenKind::Number,
                    base_offset + start..base_offset + end,
                ));
                pos = end;
                continue;
            }

            // Identifiers and keywords
            if is_ident_start(ch) {
                let start = pos;
                let (kind, end) = self.scan_word(bytes, pos);
                tokens.push(Token::new(kind, base_offset + start..base_offset + end));
                pos = end;
                continue;
            }

            // Decorators and private fields (@dec, #field)
            if ch == b'#' || ch == b'@' {
                let start = pos;
                pos += 1;
                while pos < bytes.len() && is_ident_byte(bytes[pos]) {
                    pos += 1;
                }
                tokens.push(Token::new(
                    TokenKind::Attribute,
                    base_offset + start..base_offset + pos,
                ));
                continue;
            }

            // Delimiters
            if matches!(ch, b'(' | b')' | b'[' | b']' | b'{' | b'}') {
                if tag.in_tag {
                    match ch {
                        b'{' => tag.braces += 1,
                        b'}' => tag.braces = tag.braces.saturating_sub(1),
                        _ => {}
                    }
                }
                tokens.push(Token::new(
                    TokenKind::Delimiter,
                    base_offset + pos..base_offset + pos + 1,
                ));
                pos += 1;
                continue;
            }

            // Operators (multi-char)
            if is_operator_byte(ch) {
                let start = pos;
                while pos < bytes.len() && is_operator_byte(bytes[pos]) {
                    pos += 1;
                }
                tokens.push(Token::new(
                    TokenKind::Operator,
                    base_offset + start..base_offset + pos,
                ));
                continue;
            }

            // Anything else advances by a full UTF-8 character.
            let char_len = char_len_at(line, pos);
            let kind = if ch.is_ascii() {
                TokenKind::Punctuation
            } else {
                TokenKind::Text
            };
            tokens.push(Token::new(
                kind,
                base_offset + pos..base_offset + pos + char_len,
            ));
            pos += char_len;
        }

        let state = if tag.markup() {
            LineState::InTag
        } else {
            LineState::Normal
        };
        (tokens, state)
    }
}

impl Tokenizer for GenericTokenizer {
    fn name(&self) -> &'static str {
        self.config.name
    }

    fn tokenize_line(&self, line: &str, state: LineState) -> (Vec<Token>, LineState) {
        match state {
            LineState::InComment => self.continue_block_comment(line),
            LineState::InString(kind) => self.continue_string(line, kind),
            LineState::InTag if self.config.markup_tags => self.tokenize_normal(
                line,
                0,
                TagScan {
                    in_tag: true,
                    braces: 0,
                },
            ),
            _ => self.tokenize_normal(line, 0, TagScan::default()),
        }
    }
}

// ---------------------------------------------------------------------------
// JSON Tokenizer
// ---------------------------------------------------------------------------

/// Tokenizer for JSON documents.
///
/// Handles: strings, property keys, numbers, booleans, null, structural
/// punctuation. Anything else becomes an `Error` token.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTokenizer;

impl JsonTokenizer {
    /// Key strings are followed by `:`.
    fn string_kind(bytes: &[u8], end: usize) -> TokenKind {
        if bytes.get(skip_blanks(bytes, end)) == Some(&b':') {
            TokenKind::Property
        } else {
            TokenKind::String
        }
    }
}

impl Tokenizer for JsonTokenizer {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn tokenize_line(&self, line: &str, state: LineState) -> (Vec<Token>, LineState) {
        let bytes = line.as_bytes();
        let len = bytes.len();
        let mut tokens = Vec::new();
        let mut pos = 0;
        let mut current_state = state;

        while pos < len {
            if let LineState::InString(_) = current_state {
                let start = pos;
                while pos < len {
                    if bytes[pos] == b'\\' && pos + 1 < len {
                        pos += 2;
                    } else if bytes[pos] == b'"' {
                        pos += 1;
                        current_state = LineState::Normal;
                        break;
                    } else {
                        pos += 1;
                    }
                }
                pos = pos.min(len);
                tokens.push(Token::new(TokenKind::String, start..pos));
                continue;
            }

            let b = bytes[pos];
            match b {
                b' ' | b'\t' | b'\r' => {
                    let start = pos;
                    while pos < len && matches!(bytes[pos], b' ' | b'\t' | b'\r') {
                        pos += 1;
                    }
                    tokens.push(Token::new(TokenKind::Whitespace, start..pos));
                }
                b'"' => {
                    let start = pos;
                    let (end, closed) = scan_quoted(bytes, pos, b'"');
                    pos = end;
                    if closed {
                        tokens.push(Token::new(Self::string_kind(bytes, end), start..end));
                    } else {
                        // Unterminated string continues on next line
                        tokens.push(Token::new(TokenKind::String, start..end));
                        current_state = LineState::InString(StringKind::Double);
                    }
                }
                b'{' | b'}' | b'[' | b']' => {
                    tokens.push(Token::new(TokenKind::Delimiter, pos..pos + 1));
                    pos += 1;
                }
                b':' | b',' => {
                    tokens.push(Token::new(TokenKind::Punctuation, pos..pos + 1));
                    pos += 1;
                }
                b'-' | b'0'..=b'9' => {
                    let start = pos;
                    if b == b'-' {
                        pos += 1;
                    }
                    while pos < len && bytes[pos].is_ascii_digit() {
                        pos += 1;
                    }
                    // Decimal part
                    if pos < len && bytes[pos] == b'.' {
                        pos += 1;
                        while pos < len && bytes[pos].is_ascii_digit() {
                            pos += 1;
                        }
                    }
                    // Exponent
                    if pos < len && (bytes[pos] == b'e' || bytes[pos] == b'E') {
                        pos += 1;
                        if pos < len && (bytes[pos] == b'+' || bytes[pos] == b'-') {
                            pos += 1;
                        }
                        while pos < len && bytes[pos].is_ascii_digit() {
                            pos += 1;
                        }
                    }
                    tokens.push(Token::new(TokenKind::Number, start..pos));
                }
                b't' if line.get(pos..pos + 4) == Some("true") => {
                    tokens.push(Token::new(TokenKind::Boolean, pos..pos + 4));
                    pos += 4;
                }
                b'f' if line.get(pos..pos + 5) == Some("false") => {
                    tokens.push(Token::new(TokenKind::Boolean, pos..pos + 5));
                    pos += 5;
                }
                b'n' if line.get(pos..pos + 4) == Some("null") => {
                    tokens.push(Token::new(TokenKind::Constant, pos..pos + 4));
                    pos += 4;
                }
                _ => {
                    let char_len = char_len_at(line, pos);
                    tokens.push(Token::new(TokenKind::Error, pos..pos + char_len));
                    pos += char_len;
                }
            }
        }

        (tokens, current_state)
    }
}

// ---------------------------------------------------------------------------
// CSS Tokenizer
// ---------------------------------------------------------------------------

/// Tokenizer for CSS stylesheets.
///
/// Selectors are recognized line-locally: a run that reaches `{` before any
/// `;` or `}` on the same line is a selector. Words followed by `:` are
/// property names.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssTokenizer;

impl CssTokenizer {
    /// End of a selector starting at `pos`, excluding trailing blanks.
    fn selector_end(line: &str, pos: usize) -> Option<usize> {
        let rest = &line[pos..];
        let stop = rest.find(['{', ';', '}'])?;
        if rest.as_bytes()[stop] != b'{' || rest[..stop].contains("/*") {
            return None;
        }
        let selector = rest[..stop].trim_end();
        (!selector.is_empty()).then_some(pos + selector.len())
    }

    fn continue_comment(&self, line: &str) -> (Vec<Token>, LineState) {
        match line.find("*/") {
            Some(end_pos) => {
                let end = end_pos + 2;
                let mut tokens = vec![Token::new(TokenKind::CommentBlock, 0..end)];
                let (rest, state) = self.tokenize_normal(&line[end..], end);
                tokens.extend(rest);
                (tokens, state)
            }
            None => (
                vec![Token::new(TokenKind::CommentBlock, 0..line.len())],
                LineState::InComment,
            ),
        }
    }

    fn tokenize_normal(&self, line: &str, base_offset: usize) -> (Vec<Token>, LineState) {
        let bytes = line.as_bytes();
        let mut tokens = Vec::new();
        let mut pos = 0;
        let mut saw_at_rule = false;

        while pos < bytes.len() {
            let ch = bytes[pos];
            let start = pos;

            if ch.is_ascii_whitespace() {
                while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
                    pos += 1;
                }
                tokens.push(Token::new(
                    TokenKind::Whitespace,
                    base_offset + start..base_offset + pos,
                ));
                continue;
            }

            if line[pos..].starts_with("/*") {
                match line[pos + 2..].find("*/") {
                    Some(end_pos) => {
                        pos += 2 + end_pos + 2;
                        tokens.push(Token::new(
                            TokenKind::CommentBlock,
                            base_offset + start..base_offset + pos,
                        ));
                        continue;
                    }
                    None => {
                        tokens.push(Token::new(
                            TokenKind::CommentBlock,
                            base_offset + start..base_offset + bytes.len(),
                        ));
                        return (tokens, LineState::InComment);
                    }
                }
            }

            if ch == b'"' || ch == b'\'' {
                let (end, closed) = scan_quoted(bytes, pos, ch);
                tokens.push(Token::new(
                    TokenKind::String,
                    base_offset + start..base_offset + end,
                ));
                if !closed && let Some(kind) = StringKind::from_quote(ch) {
                    return (tokens, LineState::InString(kind));
                }
                pos = end;
                continue;
            }

            if ch == b'@' {
                pos += 1;
                while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'-')
                {
                    pos += 1;
                }
                tokens.push(Token::new(
                    TokenKind::AtRule,
                    base_offset + start..base_offset + pos,
                ));
                saw_at_rule = true;
                continue;
            }

            if !saw_at_rule
                && !matches!(ch, b'{' | b'}' | b';')
                && let Some(end) = Self::selector_end(line, pos)
            {
                tokens.push(Token::new(
                    TokenKind::Selector,
                    base_offset + start..base_offset + end,
                ));
                pos = end;
                continue;
            }

            let next_is_digit = bytes.get(pos + 1).is_some_and(u8::is_ascii_digit);
            if ch.is_ascii_digit() || (matches!(ch, b'.' | b'-') && next_is_digit) {
                pos += 1;
                while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
                    pos += 1;
                }
                // Unit (px, em, %, ...)
                while pos < bytes.len() && (bytes[pos].is_ascii_alphabetic() || bytes[pos] == b'%')
                {
                    pos += 1;
                }
                tokens.push(Token::new(
                    TokenKind::Number,
                    base_offset + start..base_offset + pos,
                ));
                continue;
            }

            if ch.is_ascii_alphabetic() || ch == b'-' || ch == b'_' {
                while pos < bytes.len()
                    && (bytes[pos].is_ascii_alphanumeric() || matches!(bytes[pos], b'-' | b'_'))
                {
                    pos += 1;
                }
                let kind = match bytes.get(skip_blanks(bytes, pos)) {
                    Some(b':') => TokenKind::Property,
                    _ if bytes.get(pos) == Some(&b'(') => TokenKind::Function,
                    _ => TokenKind::Identifier,
                };
                tokens.push(Token::new(kind, base_offset + start..base_offset + pos));
                continue;
            }

            if ch == b'#' {
                pos += 1;
                while pos < bytes.len() && bytes[pos].is_ascii_alphanumeric() {
                    pos += 1;
                }
                tokens.push(Token::new(
                    TokenKind::Constant,
                    base_offset + start..base_offset + pos,
                ));
                continue;
            }

            if line[pos..].starts_with("!important") {
                pos += "!important".len();
                tokens.push(Token::new(
                    TokenKind::Keyword,
                    base_offset + start..base_offset + pos,
                ));
                continue;
            }

            let char_len = char_len_at(line, pos);
            let kind = match ch {
                b'{' | b'}' | b'(' | b')' | b':' | b';' | b',' => TokenKind::Punctuation,
                b'+' | b'>' | b'~' | b'*' | b'/' | b'=' | b'|' | b'!' => TokenKind::Operator,
                _ if ch.is_ascii() => TokenKind::Punctuation,
                _ => TokenKind::Text,
            };
            pos += char_len;
            tokens.push(Token::new(kind, base_offset + start..base_offset + pos));
        }

        (tokens, LineState::Normal)
    }
}

impl Tokenizer for CssTokenizer {
    fn name(&self) -> &'static str {
        "CSS"
    }

    fn tokenize_line(&self, line: &str, state: LineState) -> (Vec<Token>, LineState) {
        match state {
            LineState::InComment => self.continue_comment(line),
            LineState::InString(kind) => {
                let bytes = line.as_bytes();
                let mut end = 0;
                while end < bytes.len() && bytes[end] != kind.quote() {
                    end = if bytes[end] == b'\\' { end + 2 } else { end + 1 };
                }
                if end >= bytes.len() {
                    return (
                        vec![Token::new(TokenKind::String, 0..bytes.len())],
                        LineState::InString(kind),
                    );
                }
                let mut tokens = vec![Token::new(TokenKind::String, 0..end + 1)];
                let (rest, state) = self.tokenize_normal(&line[end + 1..], end + 1);
                tokens.extend(rest);
                (tokens, state)
            }
            _ => self.tokenize_normal(line, 0),
        }
    }
}

// ---------------------------------------------------------------------------
// Markup (HTML) Tokenizer
// ---------------------------------------------------------------------------

/// Tokenizer for HTML markup.
///
/// Recognizes comments, doctype declarations, tags with attribute names and
/// values, character entities and text. Tags may span several lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupTokenizer;

impl MarkupTokenizer {
    fn continue_comment(&self, line: &str) -> (Vec<Token>, LineState) {
        match line.find("-->") {
            Some(end_pos) => {
                let end = end_pos + 3;
                let mut tokens = vec![Token::new(TokenKind::CommentBlock, 0..end)];
                let (rest, state) = self.scan(&line[end..], end, false);
                tokens.extend(rest);
                (tokens, state)
            }
            None => (
                vec![Token::new(TokenKind::CommentBlock, 0..line.len())],
                LineState::InComment,
            ),
        }
    }

    fn scan(&self, line: &str, base_offset: usize, mut in_tag: bool) -> (Vec<Token>, LineState) {
        let bytes = line.as_bytes();
        let mut tokens: Vec<Token> = Vec::new();
        let mut pos = 0;

        while pos < bytes.len() {
            let ch = bytes[pos];
            let start = pos;

            if ch.is_ascii_whitespace() {
                while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
                    pos += 1;
                }
                tokens.push(Token::new(
                    TokenKind::Whitespace,
                    base_offset + start..base_offset + pos,
                ));
                continue;
            }

            if in_tag {
                let (kind, end) = match ch {
                    b'>' => {
                        in_tag = false;
                        (TokenKind::Tag, pos + 1)
                    }
                    b'/' if bytes.get(pos + 1) == Some(&b'>') => {
                        in_tag = false;
                        (TokenKind::Tag, pos + 2)
                    }
                    b'"' | b'\'' => (TokenKind::AttrValue, scan_quoted(bytes, pos, ch).0),
                    b'=' | b'/' => (TokenKind::Punctuation, pos + 1),
                    _ => {
                        let mut end = pos;
                        while end < bytes.len()
                            && !bytes[end].is_ascii_whitespace()
                            && !matches!(bytes[end], b'>' | b'/' | b'=' | b'"' | b'\'')
                        {
                            end += 1;
                        }
                        let after_equals = tokens
                            .iter()
                            .rev()
                            .find(|t| t.kind != TokenKind::Whitespace)
                            .is_some_and(|t| {
                                t.kind == TokenKind::Punctuation
                                    && bytes[t.range.start - base_offset] == b'='
                            });
                        let kind = if after_equals {
                            TokenKind::AttrValue
                        } else {
                            TokenKind::AttrName
                        };
                        (kind, end)
                    }
                };
                tokens.push(Token::new(kind, base_offset + start..base_offset + end));
                pos = end;
                continue;
            }

            if line[pos..].starts_with("<!--") {
                match line[pos + 4..].find("-->") {
                    Some(end_pos) => {
                        pos += 4 + end_pos + 3;
                        tokens.push(Token::new(
                            TokenKind::CommentBlock,
                            base_offset + start..base_offset + pos,
                        ));
                        continue;
                    }
                    None => {
                        tokens.push(Token::new(
                            TokenKind::CommentBlock,
                            base_offset + start..base_offset + bytes.len(),
                        ));
                        return (tokens, LineState::InComment);
                    }
                }
            }

            if line[pos..].starts_with("<!") {
                pos = line[pos..]
                    .find('>')
                    .map_or(bytes.len(), |end| pos + end + 1);
                tokens.push(Token::new(
                    TokenKind::Comment,
                    base_offset + start..base_offset + pos,
                ));
                continue;
            }

            if ch == b'<' {
                let name_start = if bytes.get(pos + 1) == Some(&b'/') {
                    pos + 2
                } else {
                    pos + 1
                };
                if bytes.get(name_start).is_some_and(u8::is_ascii_alphabetic) {
                    pos = name_start;
                    while pos < bytes.len()
                        && (bytes[pos].is_ascii_alphanumeric() || matches!(bytes[pos], b'-' | b':'))
                    {
                        pos += 1;
                    }
                    tokens.push(Token::new(
                        TokenKind::Tag,
                        base_offset + start..base_offset + pos,
                    ));
                    in_tag = true;
                    continue;
                }
            }

            if ch == b'&' {
                let mut end = pos + 1;
                while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'#')
                {
                    end += 1;
                }
                if end > pos + 1 && bytes.get(end) == Some(&b';') {
                    pos = end + 1;
                    tokens.push(Token::new(
                        TokenKind::Entity,
                        base_offset + start..base_offset + pos,
                    ));
                    continue;
                }
            }

            // Text run up to the next markup-significant byte.
            pos += char_len_at(line, pos);
            while pos < bytes.len() && !bytes[pos].is_ascii_whitespace() && !matches!(bytes[pos], b'<' | b'&')
            {
                pos += 1;
            }
            tokens.push(Token::new(
                TokenKind::Text,
                base_offset + start..base_offset + pos,
            ));
        }

        let state = if in_tag {
            LineState::InTag
        } else {
            LineState::Normal
        };
        (tokens, state)
    }
}

impl Tokenizer for MarkupTokenizer {
    fn name(&self) -> &'static str {
        "HTML"
    }

    fn tokenize_line(&self, line: &str, state: LineState) -> (Vec<Token>, LineState) {
        match state {
            LineState::InComment => self.continue_comment(line),
            LineState::InTag => self.scan(line, 0, true),
            _ => self.scan(line, 0, false),
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in language configurations
// ---------------------------------------------------------------------------

const JS_KEYWORDS: &[&str] = &[
    "function",
    "var",
    "let",
    "const",
    "class",
    "new",
    "delete",
    "typeof",
    "instanceof",
    "void",
    "this",
    "super",
    "import",
    "export",
    "default",
    "from",
    "as",
    "of",
    "in",
    "async",
    "await",
    "extends",
    "static",
    "get",
    "set",
];

const JS_CONTROL_KEYWORDS: &[&str] = &[
    "if", "else", "switch", "case", "for", "while", "do", "break", "continue", "return", "throw",
    "try", "catch", "finally", "yield",
];

const JS_TYPE_KEYWORDS: &[&str] = &[
    "null",
    "undefined",
    "NaN",
    "Infinity",
    "Array",
    "Object",
    "Promise",
    "Map",
    "Set",
    "JSON",
    "Math",
];

const TS_KEYWORDS: &[&str] = &[
    "function",
    "var",
    "let",
    "const",
    "class",
    "new",
    "delete",
    "typeof",
    "instanceof",
    "void",
    "this",
    "super",
    "import",
    "export",
    "default",
    "from",
    "as",
    "of",
    "in",
    "async",
    "await",
    "static",
    "get",
    "set",
    "interface",
    "type",
    "implements",
    "extends",
    "enum",
    "namespace",
    "module",
    "declare",
    "readonly",
    "public",
    "private",
    "protected",
    "abstract",
    "override",
    "satisfies",
    "keyof",
    "infer",
    "asserts",
    "is",
];

const TS_TYPE_KEYWORDS: &[&str] = &[
    "number",
    "string",
    "boolean",
    "object",
    "symbol",
    "bigint",
    "undefined",
    "null",
    "unknown",
    "never",
    "any",
    "Array",
    "ReadonlyArray",
    "Promise",
    "Map",
    "Set",
    "Record",
    "Partial",
    "Required",
    "Pick",
    "Omit",
];

/// Create a generic tokenizer configured for JavaScript.
pub const fn javascript_tokenizer() -> GenericTokenizer {
    GenericTokenizer::new(GenericTokenizerConfig {
        name: "JavaScript",
        keywords: JS_KEYWORDS,
        control_keywords: JS_CONTROL_KEYWORDS,
        type_keywords: JS_TYPE_KEYWORDS,
        line_comment: "//",
        block_comment_start: "/*",
        block_comment_end: "*/",
        template_strings: true,
        markup_tags: false,
    })
}

/// Create a generic tokenizer configured for JavaScript with JSX markup.
pub const fn jsx_tokenizer() -> GenericTokenizer {
    GenericTokenizer::new(GenericTokenizerConfig {
        name: "JSX",
        keywords: JS_KEYWORDS,
        control_keywords: JS_CONTROL_KEYWORDS,
        type_keywords: JS_TYPE_KEYWORDS,
        line_comment: "//",
        block_comment_start: "/*",
        block_comment_end: "*/",
        template_strings: true,
        markup_tags: true,
    })
}

/// Create a generic tokenizer configured for TypeScript with JSX markup.
pub const fn tsx_tokenizer() -> GenericTokenizer {
    GenericTokenizer::new(GenericTokenizerConfig {
        name: "TSX",
        keywords: TS_KEYWORDS,
        control_keywords: JS_CONTROL_KEYWORDS,
        type_keywords: TS_TYPE_KEYWORDS,
        line_comment: "//",
        block_comment_start: "/*",
        block_comment_end: "*/",
        template_strings: true,
        markup_tags: true,
    })
}
