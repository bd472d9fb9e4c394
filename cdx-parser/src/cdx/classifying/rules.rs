//! Matching rules for each literal category
//!
//!     Scalar rules are anchored regexes compiled once. Bracketed rules check an optional
//!     prefix and then require the balanced group to end exactly at the end of the text.

use crate::cdx::scanning::balanced_end;
use crate::cdx::token::LiteralCategory;
use once_cell::sync::Lazy;
use regex::Regex;

// `[0-9]` rather than `\d`: `\d` is Unicode-aware in the regex crate.
macro_rules! number {
    () => {
        r"-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?"
    };
}

macro_rules! endpoint {
    () => {
        concat!(
            r"(?:'(?:\\(?s:.)|[^\\'])'|\{[^{}\r\n]+\}|",
            number!(),
            ")"
        )
    };
}

/// Anchored patterns for the scalar categories.
const SCALAR_PATTERNS: &[(LiteralCategory, &str)] = &[
    (LiteralCategory::Iri, r"^[a-zA-Z][a-zA-Z0-9+.\-]*:[^\s>]+$"),
    (
        LiteralCategory::Uuid,
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
    ),
    (LiteralCategory::EnumToken, r"^\$[A-Z][A-Za-z0-9]*$"),
    (LiteralCategory::LookupToken, r"^~[a-z][A-Za-z0-9]*$"),
    (LiteralCategory::StringBacktick, r"^`[^`]*`$"),
    (LiteralCategory::StringQuoted, r#"^"(?:\\(?s:.)|[^\\"])*"$"#),
    (LiteralCategory::Character, r"^'(?:\\(?s:.)|[^\\'])'$"),
    (LiteralCategory::Temporal, r"^\{[^{}\r\n]+\}$"),
    (
        LiteralCategory::RangeStep,
        concat!("^", endpoint!(), r"\.\.", endpoint!(), "s", number!(), "$"),
    ),
    (
        LiteralCategory::Range,
        concat!("^", endpoint!(), r"\.\.", endpoint!(), "$"),
    ),
    (LiteralCategory::NumberInfinity, r"^-?Infinity$"),
    (
        LiteralCategory::NumberPrecision,
        concat!("^", number!(), "p[0-9]+$"),
    ),
    (
        LiteralCategory::NumberScientific,
        concat!("^", number!(), "[eE][+-]?[0-9]+$"),
    ),
    (
        LiteralCategory::NumberDecimal,
        r"^-?(?:0|[1-9][0-9]*)\.[0-9]+$",
    ),
    (LiteralCategory::NumberInteger, r"^-?(?:0|[1-9][0-9]*)$"),
    (LiteralCategory::ColorHex, r"^#[0-9a-fA-F]{3,8}$"),
    (LiteralCategory::ColorNamed, r"^&[a-z]+$"),
    (
        LiteralCategory::ColorFunction,
        r"(?i)^(?:rgb|rgba|hsl|hsla|hwb|lab|lch|oklab|oklch|color|color-mix|device-cmyk)\([^()]*\)$",
    ),
];

static SCALAR_RULES: Lazy<Vec<(LiteralCategory, Regex)>> = Lazy::new(|| {
    SCALAR_PATTERNS
        .iter()
        .map(|(category, pattern)| (*category, Regex::new(pattern).unwrap()))
        .collect()
});

/// Whether `category`'s rule matches the whole of `text`. `Opaque` matches everything.
pub fn matches(category: LiteralCategory, text: &str) -> bool {
    match category {
        LiteralCategory::Set => bracketed(text, "set"),
        LiteralCategory::Map => bracketed(text, "map"),
        LiteralCategory::List => text.starts_with('[') && bracketed(text, ""),
        LiteralCategory::Tuple => text.starts_with('(') && bracketed(text, ""),
        LiteralCategory::Opaque => true,
        scalar => SCALAR_RULES
            .iter()
            .find(|(candidate, _)| *candidate == scalar)
            .is_some_and(|(_, regex)| regex.is_match(text)),
    }
}

/// `prefix` followed by a group that is balanced and closes at the very end of `text`.
fn bracketed(text: &str, prefix: &str) -> bool {
    let Some(rest) = text.strip_prefix(prefix) else {
        return false;
    };
    if !prefix.is_empty() && !rest.starts_with('[') {
        return false;
    }
    balanced_end(text, prefix.len()) == Some(text.len())
}
