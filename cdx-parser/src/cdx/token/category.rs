//! Token categories
//!
//!     [`LiteralCategory`] is the closed set of literal classifications. Names follow the
//!     kebab-case token names CDX highlighters use (`enum-token`, `number-precision`,
//!     ...) and are what the configuration uses to rank categories.

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Classification assigned to a literal value.
///
/// The declaration order here is documentation only. Classification order is owned by
/// [`PrecedenceTable`](crate::cdx::classifying::PrecedenceTable).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LiteralCategory {
    Iri,
    Uuid,
    EnumToken,
    LookupToken,
    StringBacktick,
    StringQuoted,
    Character,
    Temporal,
    RangeStep,
    Range,
    NumberInfinity,
    NumberPrecision,
    NumberScientific,
    NumberDecimal,
    NumberInteger,
    ColorHex,
    ColorNamed,
    ColorFunction,
    Set,
    Map,
    List,
    Tuple,
    Opaque,
}

impl LiteralCategory {
    /// Kebab-case name, e.g. `number-integer`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Bracket-delimited categories whose interior is re-tokenized.
    pub fn is_collection(self) -> bool {
        matches!(self, Self::Set | Self::Map | Self::List | Self::Tuple)
    }

    pub fn is_number(self) -> bool {
        matches!(
            self,
            Self::NumberInfinity
                | Self::NumberPrecision
                | Self::NumberScientific
                | Self::NumberDecimal
                | Self::NumberInteger
        )
    }

    pub fn is_color(self) -> bool {
        matches!(self, Self::ColorHex | Self::ColorNamed | Self::ColorFunction)
    }

    /// Length of the opening delimiter of a collection (`set[`, `map[`, `[`, `(`).
    pub(crate) fn opener_len(self) -> Option<usize> {
        match self {
            Self::Set | Self::Map => Some(4),
            Self::List | Self::Tuple => Some(1),
            _ => None,
        }
    }
}

/// Whether a marker opens, closes, or closes itself.
///
/// A leading `/` always makes a close marker, even when the marker also ends with `/>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerForm {
    Open,
    Close,
    SelfClosing,
}

impl MarkerForm {
    pub fn name(self) -> &'static str {
        match self {
            MarkerForm::Open => "open",
            MarkerForm::Close => "close",
            MarkerForm::SelfClosing => "self-closing",
        }
    }
}

/// Category tag of a [`Token`](super::Token).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// `[...]` block anchored at the start of a line.
    Annotation,
    /// `<Name ...>`, `</Name>` or `<Name .../>`.
    Marker(MarkerForm),
    /// Anything that is not structure. Also used for unrecognized runs inside markers and
    /// for the unclassified remainder of an opaque value.
    Text,
    Whitespace,
    Newline,
    /// `<`, `</`, `>`, `/>`, and collection brackets.
    Punctuation,
    ConceptName,
    Trait,
    TraitName,
    /// The `=` of a trait.
    Operator,
    /// `,` between collection elements, `:` between map keys and values.
    Separator,
    Literal(LiteralCategory),
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Annotation => "annotation",
            TokenKind::Marker(_) => "marker",
            TokenKind::Text => "text",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Newline => "newline",
            TokenKind::Punctuation => "punctuation",
            TokenKind::ConceptName => "concept-name",
            TokenKind::Trait => "trait",
            TokenKind::TraitName => "trait-name",
            TokenKind::Operator => "operator",
            TokenKind::Separator => "separator",
            TokenKind::Literal(category) => category.name(),
        }
    }

    pub fn literal(&self) -> Option<LiteralCategory> {
        match self {
            TokenKind::Literal(category) => Some(*category),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn names_round_trip_through_from_str() {
        for category in LiteralCategory::iter() {
            assert_eq!(LiteralCategory::from_str(category.name()), Ok(category));
        }
    }

    #[test]
    fn names_match_highlighter_tokens() {
        assert_eq!(LiteralCategory::EnumToken.name(), "enum-token");
        assert_eq!(LiteralCategory::NumberPrecision.name(), "number-precision");
        assert_eq!(LiteralCategory::ColorFunction.to_string(), "color-function");
        assert!(LiteralCategory::from_str("not-a-category").is_err());
    }

    #[test]
    fn collection_openers() {
        assert_eq!(LiteralCategory::Set.opener_len(), Some(4));
        assert_eq!(LiteralCategory::Tuple.opener_len(), Some(1));
        assert_eq!(LiteralCategory::Temporal.opener_len(), None);
        assert!(LiteralCategory::Map.is_collection());
        assert!(!LiteralCategory::ColorFunction.is_collection());
    }

    #[test]
    fn token_kind_names() {
        assert_eq!(TokenKind::Marker(MarkerForm::Close).name(), "marker");
        assert_eq!(
            TokenKind::Literal(LiteralCategory::StringQuoted).name(),
            "string-quoted"
        );
        assert_eq!(TokenKind::Text.literal(), None);
    }
}
