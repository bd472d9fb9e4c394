//! The token tree node

use super::category::{LiteralCategory, MarkerForm, TokenKind};
use serde::Serialize;
use std::ops::Range;

/// A categorized byte range of the source, with ordered children.
///
/// Children spans are contained in the parent span and do not overlap each other. Container
/// tokens (markers, traits, collections, salvaged opaque values) are tiled exactly by their
/// children; annotations and scalar literals are leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Token>,
}

impl Token {
    pub fn leaf(kind: TokenKind, span: Range<usize>) -> Self {
        Token {
            kind,
            span,
            children: Vec::new(),
        }
    }

    pub fn branch(kind: TokenKind, span: Range<usize>, children: Vec<Token>) -> Self {
        Token {
            kind,
            span,
            children,
        }
    }

    /// The lexeme of this token. `source` must be the text the token was produced from.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span.clone()]
    }

    pub fn len(&self) -> usize {
        self.span.end - self.span.start
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    pub fn literal(&self) -> Option<LiteralCategory> {
        self.kind.literal()
    }

    pub fn marker_form(&self) -> Option<MarkerForm> {
        match self.kind {
            TokenKind::Marker(form) => Some(form),
            _ => None,
        }
    }

    /// Concept name of a marker (`Foo` in `<Foo a=1>`).
    pub fn concept_name<'s>(&self, source: &'s str) -> Option<&'s str> {
        self.marker_form()?;
        self.children
            .iter()
            .find(|child| child.kind == TokenKind::ConceptName)
            .map(|child| child.text(source))
    }

    /// Traits of a marker, in source order.
    pub fn traits(&self) -> impl Iterator<Item = TraitView<'_>> {
        self.children.iter().filter_map(TraitView::new)
    }

    /// Pre-order traversal over this token and all of its descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

/// Borrowed view over a `Trait` token's three parts.
#[derive(Debug, Clone, Copy)]
pub struct TraitView<'t> {
    pub name: &'t Token,
    pub operator: &'t Token,
    pub value: &'t Token,
}

impl<'t> TraitView<'t> {
    pub fn new(token: &'t Token) -> Option<Self> {
        if token.kind != TokenKind::Trait {
            return None;
        }
        match token.children.as_slice() {
            [name, operator, value] => Some(TraitView {
                name,
                operator,
                value,
            }),
            _ => None,
        }
    }

    pub fn name_text<'s>(&self, source: &'s str) -> &'s str {
        self.name.text(source)
    }

    pub fn value_text<'s>(&self, source: &'s str) -> &'s str {
        self.value.text(source)
    }
}

/// Iterator returned by [`Token::walk`].
pub struct Walk<'t> {
    stack: Vec<&'t Token>,
}

impl<'t> Iterator for Walk<'t> {
    type Item = &'t Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.stack.pop()?;
        self.stack.extend(token.children.iter().rev());
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (String, Token) {
        // <A b=1>
        let source = "<A b=1>".to_string();
        let value = Token::leaf(TokenKind::Literal(LiteralCategory::NumberInteger), 5..6);
        let trait_token = Token::branch(
            TokenKind::Trait,
            3..6,
            vec![
                Token::leaf(TokenKind::TraitName, 3..4),
                Token::leaf(TokenKind::Operator, 4..5),
                value,
            ],
        );
        let marker = Token::branch(
            TokenKind::Marker(MarkerForm::Open),
            0..7,
            vec![
                Token::leaf(TokenKind::Punctuation, 0..1),
                Token::leaf(TokenKind::ConceptName, 1..2),
                Token::leaf(TokenKind::Whitespace, 2..3),
                trait_token,
                Token::leaf(TokenKind::Punctuation, 6..7),
            ],
        );
        (source, marker)
    }

    #[test]
    fn test_marker_accessors() {
        let (source, marker) = sample();
        assert_eq!(marker.concept_name(&source), Some("A"));
        assert_eq!(marker.marker_form(), Some(MarkerForm::Open));

        let traits: Vec<_> = marker.traits().collect();
        assert_eq!(traits.len(), 1);
        assert_eq!(traits[0].name_text(&source), "b");
        assert_eq!(traits[0].value_text(&source), "1");
        assert_eq!(
            traits[0].value.literal(),
            Some(LiteralCategory::NumberInteger)
        );
    }

    #[test]
    fn test_walk_is_pre_order() {
        let (_, marker) = sample();
        let kinds: Vec<_> = marker.walk().map(|t| t.kind.name()).collect();
        assert_eq!(
            kinds,
            vec![
                "marker",
                "punctuation",
                "concept-name",
                "whitespace",
                "trait",
                "trait-name",
                "operator",
                "number-integer",
                "punctuation",
            ]
        );
    }

    #[test]
    fn test_concept_name_only_on_markers() {
        let token = Token::leaf(TokenKind::Text, 0..3);
        assert_eq!(token.concept_name("abc"), None);
        assert_eq!(token.len(), 3);
        assert!(!token.is_empty());
    }
}
