#![forbid(unsafe_code)]

//! The closed set of languages the editor can highlight.

use std::fmt;
use std::str::FromStr;

use crate::tokenizer::{
    CssTokenizer, GenericTokenizer, JsonTokenizer, MarkupTokenizer, Tokenizer,
    javascript_tokenizer, jsx_tokenizer, tsx_tokenizer,
};

static JAVASCRIPT: GenericTokenizer = javascript_tokenizer();
static JSX: GenericTokenizer = jsx_tokenizer();
static TSX: GenericTokenizer = tsx_tokenizer();

/// Language selector values, in option-list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum LanguageId {
    /// JavaScript with JSX markup (default).
    #[default]
    Jsx,
    /// TypeScript with JSX markup.
    Tsx,
    Css,
    Html,
    JavaScript,
    Json,
}

impl LanguageId {
    pub const ALL: [LanguageId; 6] = [
        LanguageId::Jsx,
        LanguageId::Tsx,
        LanguageId::Css,
        LanguageId::Html,
        LanguageId::JavaScript,
        LanguageId::Json,
    ];

    /// Option value, e.g. `"javascript"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            LanguageId::Jsx => "jsx",
            LanguageId::Tsx => "tsx",
            LanguageId::Css => "css",
            LanguageId::Html => "html",
            LanguageId::JavaScript => "javascript",
            LanguageId::Json => "json",
        }
    }

    /// Tokenizer for this language.
    pub fn tokenizer(self) -> &'static dyn Tokenizer {
        match self {
            LanguageId::Jsx => &JSX,
            LanguageId::Tsx => &TSX,
            LanguageId::Css => &CssTokenizer,
            LanguageId::Html => &MarkupTokenizer,
            LanguageId::JavaScript => &JAVASCRIPT,
            LanguageId::Json => &JsonTokenizer,
        }
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a language option that is not in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language: {:?}", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for LanguageId {
    type Err = UnknownLanguage;

    /// Exact match on the option value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_order_and_default() {
        assert_eq!(LanguageId::default(), LanguageId::Jsx);
        let names: Vec<_> = LanguageId::ALL.iter().map(|l| l.as_str()).collect();
        assert_eq!(names, ["jsx", "tsx", "css", "html", "javascript", "json"]);
    }

    #[test]
    fn parse_is_exact() {
        assert_eq!("json".parse::<LanguageId>(), Ok(LanguageId::Json));
        assert_eq!("javascript".parse::<LanguageId>(), Ok(LanguageId::JavaScript));
        assert_eq!(
            "JSON".parse::<LanguageId>(),
            Err(UnknownLanguage("JSON".to_string()))
        );
        assert!("python".parse::<LanguageId>().is_err());
    }

    #[test]
    fn each_language_has_a_tokenizer() {
        assert_eq!(LanguageId::Jsx.tokenizer().name(), "JSX");
        assert_eq!(LanguageId::Tsx.tokenizer().name(), "TSX");
        assert_eq!(LanguageId::Css.tokenizer().name(), "CSS");
        assert_eq!(LanguageId::Html.tokenizer().name(), "HTML");
        assert_eq!(LanguageId::JavaScript.tokenizer().name(), "JavaScript");
        assert_eq!(LanguageId::Json.tokenizer().name(), "JSON");
    }

    #[test]
    fn display_matches_option_value() {
        assert_eq!(LanguageId::Tsx.to_string(), "tsx");
    }
}
