#![forbid(unsafe_code)]

//! Built-in highlight themes.
//!
//! Six palettes, one per entry of the theme selector. Each maps every
//! [`TokenKind`] to a [`Style`] and carries the plain foreground and
//! background used for the overlay box.

use std::fmt;
use std::str::FromStr;

use crate::style::{Rgb, Style};
use crate::token::TokenKind;

/// Built-in theme identifiers, in option-list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum ThemeId {
    /// Visual Studio dark (default).
    #[default]
    VsDark,
    DuotoneDark,
    DuotoneLight,
    NightOwl,
    OceanicNext,
    Okaidia,
}

impl ThemeId {
    pub const ALL: [ThemeId; 6] = [
        ThemeId::VsDark,
        ThemeId::DuotoneDark,
        ThemeId::DuotoneLight,
        ThemeId::NightOwl,
        ThemeId::OceanicNext,
        ThemeId::Okaidia,
    ];

    pub const fn index(self) -> usize {
        match self {
            ThemeId::VsDark => 0,
            ThemeId::DuotoneDark => 1,
            ThemeId::DuotoneLight => 2,
            ThemeId::NightOwl => 3,
            ThemeId::OceanicNext => 4,
            ThemeId::Okaidia => 5,
        }
    }

    /// Option value, e.g. `"nightOwl"`.
    pub const fn name(self) -> &'static str {
        match self {
            ThemeId::VsDark => "vsDark",
            ThemeId::DuotoneDark => "duotoneDark",
            ThemeId::DuotoneLight => "duotoneLight",
            ThemeId::NightOwl => "nightOwl",
            ThemeId::OceanicNext => "oceanicNext",
            ThemeId::Okaidia => "okaidia",
        }
    }

    /// Caret color for the input surface: black on the light theme, white
    /// on the dark ones.
    pub const fn caret_color(self) -> Rgb {
        match self {
            ThemeId::DuotoneLight => Rgb::new(0x00, 0x00, 0x00),
            _ => Rgb::new(0xFF, 0xFF, 0xFF),
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a theme option that is not in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme: {:?}", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for ThemeId {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.name() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// HighlightTheme
// ---------------------------------------------------------------------------

/// Per-kind styles for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightTheme {
    /// Overlay background.
    pub background: Rgb,
    /// Plain text color; unset token colors inherit it.
    pub foreground: Rgb,
    pub keyword: Style,
    pub builtin: Style,
    pub string: Style,
    pub number: Style,
    pub constant: Style,
    pub variable: Style,
    pub class_name: Style,
    pub function: Style,
    pub property: Style,
    pub comment: Style,
    pub operator: Style,
    pub punctuation: Style,
    pub tag: Style,
    pub attr_name: Style,
    pub attr_value: Style,
    pub selector: Style,
    pub atrule: Style,
    pub error: Style,
}

impl HighlightTheme {
    /// Style for a token kind.
    pub fn style_for(&self, kind: TokenKind) -> Style {
        match kind {
            TokenKind::Keyword | TokenKind::KeywordControl => self.keyword,
            TokenKind::KeywordType => self.builtin,
            TokenKind::String => self.string,
            TokenKind::Number => self.number,
            TokenKind::Boolean | TokenKind::Constant | TokenKind::Entity => self.constant,
            TokenKind::Identifier => self.variable,
            TokenKind::Type => self.class_name,
            TokenKind::Function => self.function,
            TokenKind::Property => self.property,
            TokenKind::Comment | TokenKind::CommentBlock => self.comment,
            TokenKind::Operator => self.operator,
            TokenKind::Punctuation | TokenKind::Delimiter => self.punctuation,
            TokenKind::Tag => self.tag,
            TokenKind::AttrName | TokenKind::Attribute => self.attr_name,
            TokenKind::AttrValue => self.attr_value,
            TokenKind::Selector => self.selector,
            TokenKind::AtRule => self.atrule,
            TokenKind::Error => self.error,
            TokenKind::Whitespace | TokenKind::Text => Style::new(),
        }
    }

    /// Style of untokenized text: the plain foreground.
    pub const fn plain(&self) -> Style {
        Style::new().fg(self.foreground)
    }
}

const fn c(hex: u32) -> Style {
    Style::new().fg(Rgb::hex(hex))
}

const THEMES: [HighlightTheme; 6] = [
    // vsDark
    HighlightTheme {
        background: Rgb::hex(0x1E1E1E),
        foreground: Rgb::hex(0x9CDCFE),
        keyword: c(0x569CD6),
        builtin: c(0x4EC9B0),
        string: c(0xCE9178),
        number: c(0xB5CEA8),
        constant: c(0x569CD6),
        variable: c(0x9CDCFE),
        class_name: c(0x4EC9B0),
        function: c(0xDCDCAA),
        property: c(0x9CDCFE),
        comment: c(0x6A9955),
        operator: c(0xD4D4D4),
        punctuation: c(0xD4D4D4),
        tag: c(0x4EC9B0),
        attr_name: c(0x9CDCFE),
        attr_value: c(0xCE9178),
        selector: c(0xD7BA7D),
        atrule: c(0xC586C0),
        error: c(0xF44747),
    },
    // duotoneDark
    HighlightTheme {
        background: Rgb::hex(0x2A2734),
        foreground: Rgb::hex(0x9A86FD),
        keyword: c(0xFFCC99),
        builtin: c(0xFFCC99),
        string: c(0xFFCC99),
        number: c(0xE09142),
        constant: c(0xE09142),
        variable: c(0xFFCC99),
        class_name: c(0xFFCC99),
        function: c(0x9A86FD),
        property: c(0x9A86FD),
        comment: c(0x6C6783).italic(),
        operator: c(0xE09142),
        punctuation: c(0x6C6783),
        tag: c(0xE09142),
        attr_name: c(0xC4B9FE),
        attr_value: c(0xFFCC99),
        selector: c(0xEEEBFF),
        atrule: c(0xE09142),
        error: c(0xEEEBFF),
    },
    // duotoneLight
    HighlightTheme {
        background: Rgb::hex(0xFAF8F5),
        foreground: Rgb::hex(0x728FCB),
        keyword: c(0x728FCB),
        builtin: c(0x063289),
        string: c(0x2D2006),
        number: c(0x063289),
        constant: c(0x063289),
        variable: c(0x2D2006),
        class_name: c(0x2D2006),
        function: c(0x728FCB),
        property: c(0xB29762),
        comment: c(0xB6AD9A).italic(),
        operator: c(0x063289),
        punctuation: c(0xB6AD9A),
        tag: c(0x063289),
        attr_name: c(0x896724),
        attr_value: c(0x728FCB),
        selector: c(0x2D2006),
        atrule: c(0x063289),
        error: c(0x2D2006),
    },
    // nightOwl
    HighlightTheme {
        background: Rgb::hex(0x011627),
        foreground: Rgb::hex(0xD6DEEB),
        keyword: c(0x7FDBCA),
        builtin: c(0x82AAFF),
        string: c(0xECC48D),
        number: c(0xF78C6C),
        constant: c(0xFF5874),
        variable: c(0xD6DEEB),
        class_name: c(0xFFCB8B),
        function: c(0x82AAFF),
        property: c(0x80CBC4),
        comment: c(0x637777).italic(),
        operator: c(0x7FDBCA),
        punctuation: c(0xC792EA),
        tag: c(0x7FDBCA),
        attr_name: c(0xADDB67).italic(),
        attr_value: c(0xECC48D),
        selector: c(0xC792EA).italic(),
        atrule: c(0xC792EA),
        error: c(0xEF5350),
    },
    // oceanicNext
    HighlightTheme {
        background: Rgb::hex(0x1B2B34),
        foreground: Rgb::hex(0xCDD3DE),
        keyword: c(0xC594C5),
        builtin: c(0xFAC863),
        string: c(0x99C794),
        number: c(0xF99157),
        constant: c(0xF99157),
        variable: c(0xF99157),
        class_name: c(0xFAC863),
        function: c(0x6699CC),
        property: c(0x5FB3B3),
        comment: c(0x65737E),
        operator: c(0x5FB3B3),
        punctuation: c(0x5FB3B3),
        tag: c(0xEC5F67),
        attr_name: c(0xC594C5),
        attr_value: c(0x99C794),
        selector: c(0xFAC863),
        atrule: c(0xC594C5),
        error: c(0xEC5F67),
    },
    // okaidia
    HighlightTheme {
        background: Rgb::hex(0x272822),
        foreground: Rgb::hex(0xF8F8F2),
        keyword: c(0x66D9EF),
        builtin: c(0xA6E22E),
        string: c(0xA6E22E),
        number: c(0xAE81FF),
        constant: c(0xAE81FF),
        variable: c(0xF8F8F2),
        class_name: c(0xE6DB74),
        function: c(0xE6DB74),
        property: c(0xF92672),
        comment: c(0x8292A2),
        operator: c(0xF8F8F2),
        punctuation: c(0xF8F8F2),
        tag: c(0xF92672),
        attr_name: c(0xA6E22E),
        attr_value: c(0xE6DB74),
        selector: c(0xA6E22E),
        atrule: c(0xE6DB74),
        error: c(0xF92672).bold(),
    },
];

/// Styles for a built-in theme.
pub fn palette(theme: ThemeId) -> &'static HighlightTheme {
    &THEMES[theme.index()]
}
